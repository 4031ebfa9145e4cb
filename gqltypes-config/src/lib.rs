// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for gen-global-gql-types.
//!
//! Every setting has a built-in default, so a project only needs a
//! `gqltypes.toml` when it wants to point at a different generator or
//! change where the merged file comes from.

mod error;
mod file;
mod generator;
mod output;
mod parse;

pub use error::{Error, Result};
pub use file::ConfigFile;
pub use generator::{DEFAULT_PROGRAM, DEFAULT_TEMP_DIR, GeneratorConfig};
pub use output::{FilterMode, OutputConfig};
pub use parse::{parse_config, temp_dir_problem};
use serde::Deserialize;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "gqltypes.toml";

/// Root of gqltypes.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How the external generator is invoked
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Where the merged file goes and which entries feed it
    #[serde(default)]
    pub output: OutputConfig,
}
