//! Output settings and the entry filter mode.

use serde::Deserialize;

/// Which temp directory entries are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Every directory entry, whatever its name
    #[default]
    All,
    /// Only entries whose name contains `filter_pattern`
    Matching,
}

/// Where and how the merged file is written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Extension appended to the output base name, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default)]
    pub filter: FilterMode,

    /// Substring an entry name must contain when `filter = "matching"`
    #[serde(default = "default_filter_pattern")]
    pub filter_pattern: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            filter: FilterMode::default(),
            filter_pattern: default_filter_pattern(),
        }
    }
}

fn default_extension() -> String {
    "ts".to_string()
}

fn default_filter_pattern() -> String {
    ".ts".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_names_are_lowercase() {
        let output: OutputConfig = toml::from_str("filter = \"matching\"").unwrap();
        assert_eq!(output.filter, FilterMode::Matching);
        assert!(toml::from_str::<OutputConfig>("filter = \"Matching\"").is_err());
    }
}
