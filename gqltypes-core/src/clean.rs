use std::{io::ErrorKind, path::Path};

use crate::{Error, Result};

/// Recursively delete the temporary directory. A directory that is already
/// gone counts as removed.
pub fn remove_temp_dir(path: &Path) -> Result<()> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Cleanup {
            path: path.to_path_buf(),
            source,
        }),
    }
}
