//! Resolved settings for one run.

use std::path::{Path, PathBuf};

use gqltypes_config::{Config, FilterMode};
use gqltypes_core::{EntryFilter, Generator};

/// Everything a run needs, after config file and command-line overrides
/// have been applied.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory the generator runs in and the output lands in.
    pub working_dir: PathBuf,
    pub generator: Generator,
    /// Scratch directory name, relative to `working_dir`.
    pub temp_dir_name: String,
    /// Output extension without the dot.
    pub extension: String,
    pub filter: EntryFilter,
}

impl Settings {
    pub fn from_config(config: &Config, working_dir: impl Into<PathBuf>) -> Self {
        let generator = Generator::new(&config.generator.program)
            .subcommand(&config.generator.subcommand)
            .target(&config.generator.target)
            .flat(config.generator.flat);

        let filter = match config.output.filter {
            FilterMode::All => EntryFilter::All,
            FilterMode::Matching => EntryFilter::Matching(config.output.filter_pattern.clone()),
        };

        Self {
            working_dir: working_dir.into(),
            generator,
            temp_dir_name: config.generator.temp_dir.clone(),
            extension: config.output.extension.clone(),
            filter,
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Absolute path of the scratch directory.
    pub fn temp_dir(&self) -> PathBuf {
        self.working_dir.join(&self.temp_dir_name)
    }
}
