//! Config parsing and validation.

use std::str::FromStr;

use crate::{Config, Error, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, crate::CONFIG_FILE_NAME)
    }
}

/// Parse a config from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.generator.program.trim().is_empty() {
        return Err(ctx.validation_error("program", "generator program must not be empty"));
    }

    if let Some(reason) = temp_dir_problem(&config.generator.temp_dir) {
        return Err(ctx.validation_error("temp_dir", reason));
    }

    let extension = &config.output.extension;
    if extension.is_empty() {
        return Err(ctx.validation_error("extension", "output extension must not be empty"));
    }
    if extension.starts_with('.') || extension.contains(['/', '\\']) {
        return Err(ctx.validation_error(
            "extension",
            format!(
                "output extension '{}' must not start with a dot or contain separators",
                extension
            ),
        ));
    }

    Ok(())
}

/// Returns why `name` cannot be used as a single directory below the working directory.
pub fn temp_dir_problem(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("temp directory name must not be empty".to_string());
    }
    if name == "." || name == ".." {
        return Some(format!("temp directory name '{}' is reserved", name));
    }
    if name.contains(['/', '\\']) {
        return Some(format!(
            "temp directory name '{}' must be a single path component",
            name
        ));
    }
    None
}
