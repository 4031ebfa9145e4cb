use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{Context, Result};
use gqltypes_config::{Config, ConfigFile, FilterMode, temp_dir_problem};
use gqltypes_core::{Invocation, Throttle, TracingSink};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    settings::Settings,
};

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gqltypes_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for gqltypes_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

fn parse_temp_dir(name: &str) -> std::result::Result<String, String> {
    match temp_dir_problem(name) {
        Some(reason) => Err(reason),
        None => Ok(name.to_string()),
    }
}

#[derive(Parser)]
#[command(name = "gen-global-gql-types")]
#[command(version)]
#[command(about = "Generate Apollo GraphQL types and merge them into one TypeScript file")]
pub(crate) struct Cli {
    /// Path to a config file (defaults to ./gqltypes.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generator executable (overrides the config file)
    #[arg(short, long)]
    pub generator: Option<String>,

    /// Temporary directory name, relative to the working directory
    #[arg(long, value_parser = parse_temp_dir)]
    pub temp_dir: Option<String>,

    /// Only merge generated entries whose name contains the filter pattern
    #[arg(long)]
    pub only_matching: bool,

    /// Directory to run in (defaults to $PWD, then the process working directory)
    #[arg(long, env = "PWD", hide_env_values = true)]
    pub working_dir: Option<PathBuf>,

    /// One argument passed to the generator, followed by the output file name
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        tracing::info!("STARTING");
        Invocation::check_args(&self.args).unwrap_or_exit();

        let working_dir = self.working_dir()?;
        let config = self.load_config(&working_dir);
        let settings = Settings::from_config(&config, working_dir);

        let invocation = Invocation::parse(
            self.args.clone(),
            settings.working_dir(),
            &settings.extension,
        )
        .unwrap_or_exit();

        let mut log = Throttle::new(TracingSink);
        let report = ops::merge(&settings, &invocation, &mut log)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Always absolute, so the generator's cwd and the output path agree.
    fn working_dir(&self) -> Result<PathBuf> {
        match &self.working_dir {
            Some(dir) if !dir.as_os_str().is_empty() => std::path::absolute(dir)
                .wrap_err_with(|| format!("Failed to resolve '{}'", dir.display())),
            _ => std::env::current_dir().wrap_err("Failed to determine the working directory"),
        }
    }

    /// Defaults, then the config file, then command-line flags.
    fn load_config(&self, working_dir: &Path) -> Config {
        let file = match &self.config {
            Some(path) => Some(ConfigFile::open(working_dir.join(path)).unwrap_or_exit()),
            None => ConfigFile::discover(working_dir).unwrap_or_exit(),
        };

        let mut config = match file {
            Some(file) => {
                tracing::debug!(path = %file.path().display(), "loaded config");
                file.into_config()
            }
            None => Config::default(),
        };

        if let Some(program) = &self.generator {
            config.generator.program = program.clone();
        }
        if let Some(temp_dir) = &self.temp_dir {
            config.generator.temp_dir = temp_dir.clone();
        }
        if self.only_matching {
            config.output.filter = FilterMode::Matching;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_passthrough_args_keep_hyphens() {
        let cli = Cli::try_parse_from([
            "gen-global-gql-types",
            "--temp-dir",
            "scratch",
            "--queries=src/**/*.graphql",
            "globalTypes",
        ])
        .unwrap();

        assert_eq!(cli.temp_dir.as_deref(), Some("scratch"));
        assert_eq!(cli.args, ["--queries=src/**/*.graphql", "globalTypes"]);
    }

    #[test]
    fn test_nested_temp_dir_rejected() {
        let result = Cli::try_parse_from(["gen-global-gql-types", "--temp-dir", "a/b", "x", "y"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_working_dir_made_absolute() {
        let cli =
            Cli::try_parse_from(["gen-global-gql-types", "--working-dir", "proj", "x", "y"]).unwrap();
        let dir = cli.working_dir().unwrap();

        assert!(dir.is_absolute());
        assert_eq!(dir, std::env::current_dir().unwrap().join("proj"));
    }

    #[test]
    fn test_flags_override_config() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("gqltypes.toml"),
            "[generator]\nprogram = \"apollo\"\ntemp_dir = \"from-file\"\n",
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "gen-global-gql-types",
            "--temp-dir",
            "from-flag",
            "--only-matching",
            "x",
            "y",
        ])
        .unwrap();
        let config = cli.load_config(temp.path());

        assert_eq!(config.generator.program, "apollo");
        assert_eq!(config.generator.temp_dir, "from-flag");
        assert_eq!(config.output.filter, FilterMode::Matching);
    }
}
