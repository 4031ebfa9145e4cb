use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for pipeline steps
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the individual pipeline steps.
///
/// Only `Usage` is raised before any I/O happens; every other variant
/// carries the path or program that failed and the underlying I/O error.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Please provide the output file name as the first argument")]
    #[diagnostic(
        code(gqltypes::usage),
        help("usage: gen-global-gql-types <generator-arg> <output-name>")
    )]
    Usage { received: usize },

    #[error("failed to start generator '{program}'")]
    #[diagnostic(
        code(gqltypes::spawn),
        help("install the apollo CLI or point --generator at another executable")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to scan directory '{path}'")]
    #[diagnostic(
        code(gqltypes::scan_dir),
        help("the generator did not produce its output directory; check its output above")
    )]
    ScanDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read generated file '{path}'")]
    #[diagnostic(code(gqltypes::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(gqltypes::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove temporary directory '{path}'")]
    #[diagnostic(code(gqltypes::cleanup))]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
