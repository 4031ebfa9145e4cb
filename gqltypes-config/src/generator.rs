use serde::Deserialize;

/// Default location of the Apollo CLI inside a project's node_modules.
pub const DEFAULT_PROGRAM: &str = "./node_modules/apollo/bin/run";

/// Default scratch directory, relative to the working directory.
pub const DEFAULT_TEMP_DIR: &str = "gen-global-gql-types-tmp";

/// How the external generator is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Executable to spawn
    #[serde(default = "default_program")]
    pub program: String,

    /// Subcommand passed as the first argument
    #[serde(default = "default_subcommand")]
    pub subcommand: String,

    /// Value of the `--target=` flag
    #[serde(default = "default_target")]
    pub target: String,

    /// Emit `--outputFlat` so every operation lands directly in the temp dir
    #[serde(default = "default_flat")]
    pub flat: bool,

    /// Scratch directory name the generator writes into
    #[serde(default = "default_temp_dir")]
    pub temp_dir: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            subcommand: default_subcommand(),
            target: default_target(),
            flat: default_flat(),
            temp_dir: default_temp_dir(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_subcommand() -> String {
    "codegen:generate".to_string()
}

fn default_target() -> String {
    "typescript".to_string()
}

fn default_flat() -> bool {
    true
}

fn default_temp_dir() -> String {
    DEFAULT_TEMP_DIR.to_string()
}
