use std::path::{Path, PathBuf};

use crate::{Error, Result};

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// The merged output file
pub struct OutputFile {
    path: PathBuf,
    content: String,
}

impl OutputFile {
    /// Create a new output file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the file, replacing whatever is there. Returns the number of bytes written.
    pub fn write(&self) -> Result<usize> {
        write_file(&self.path, &self.content).map_err(|source| {
            tracing::error!("{}: {}", self.path.display(), source);
            Error::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(self.content.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src").join("types").join("global.ts");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_output_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("globalTypes.ts");
        fs::write(&path, "stale").unwrap();

        let file = OutputFile::new(&path, "fresh");
        let written = file.write().unwrap();

        assert_eq!(written, 5);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_output_file_writes_empty_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.ts");

        assert_eq!(OutputFile::new(&path, "").write().unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_output_file_write_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should go cannot be overwritten
        let path = temp.path().join("taken.ts");
        fs::create_dir(&path).unwrap();

        let err = OutputFile::new(&path, "x").write().unwrap_err();

        match err {
            Error::Write { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_path_accessor() {
        let file = OutputFile::new("/w/out.ts", "body");
        assert_eq!(file.path(), Path::new("/w/out.ts"));
    }
}
