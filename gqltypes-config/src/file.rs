use std::path::{Path, PathBuf};

use crate::{CONFIG_FILE_NAME, Config, Result, parse::parse_config};

/// A config file on disk and the config parsed from it.
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self { path, config })
    }

    /// Open `gqltypes.toml` in `dir` if there is one.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the file, keeping only the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}
