//! Concatenating generated files and stripping their module syntax.
//!
//! The substitutions are purely textual. Anything that matches is removed,
//! including text inside comments or string literals.

use std::{path::PathBuf, sync::LazyLock};

use regex::Regex;

use crate::{Error, Result};

/// From `import` to the end of its line. The newline itself is kept.
static IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)import.+").expect("Invalid import regex"));

/// The `export ` keyword; the rest of the line is kept.
static EXPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)export ").expect("Invalid export regex"));

/// Read every file in order and join the contents with no separator.
pub fn concat(paths: &[PathBuf]) -> Result<String> {
    let mut buffer = String::new();
    for path in paths {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        buffer.push_str(&content);
    }
    Ok(buffer)
}

/// Remove import statements and `export` keywords so the text can stand alone.
pub fn strip_module_syntax(text: &str) -> String {
    let without_imports = IMPORT_REGEX.replace_all(text, "");
    EXPORT_REGEX.replace_all(&without_imports, "").into_owned()
}
