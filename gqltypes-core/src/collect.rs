//! Listing what the generator wrote.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Which directory entries are handed to the merger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EntryFilter {
    /// Every entry, regardless of its name.
    #[default]
    All,
    /// Entries whose file name contains the given text, e.g. `.ts`.
    Matching(String),
}

impl EntryFilter {
    pub fn accepts(&self, file_name: &str) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Matching(pattern) => file_name.contains(pattern.as_str()),
        }
    }
}

/// List the entries of `dir` in the order the filesystem returns them.
///
/// The order is not sorted; it is whatever `read_dir` yields.
pub fn collect(dir: &Path, filter: &EntryFilter) -> Result<Vec<PathBuf>> {
    let scan_err = |source: std::io::Error| {
        tracing::error!("Unable to scan directory {}: {}", dir.display(), source);
        Error::ScanDir {
            path: dir.to_path_buf(),
            source,
        }
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        let name = entry.file_name();
        if filter.accepts(&name.to_string_lossy()) {
            files.push(entry.path());
        }
    }

    tracing::debug!(count = files.len(), dir = %dir.display(), "collected generated files");
    Ok(files)
}
