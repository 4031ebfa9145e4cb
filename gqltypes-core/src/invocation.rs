//! Split the raw positional arguments into generator flags and the output name.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Number of generator arguments that must precede the output name.
const GENERATOR_ARG_COUNT: usize = 1;

/// The positional arguments of one run, resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    generator_args: Vec<String>,
    output_path: PathBuf,
}

impl Invocation {
    /// Check the argument count alone, before anything is read from disk.
    pub fn check_args(args: &[String]) -> Result<()> {
        let received = args.len().saturating_sub(1);
        if args.is_empty() || received != GENERATOR_ARG_COUNT {
            return Err(Error::Usage { received });
        }
        Ok(())
    }

    /// Parse `[generator-args...] <output-name>`.
    ///
    /// The last argument becomes the output base name and `extension` is
    /// appended to it. Exactly one argument must remain for the generator.
    pub fn parse(mut args: Vec<String>, working_dir: &Path, extension: &str) -> Result<Self> {
        Self::check_args(&args)?;
        let output_name = args.pop().unwrap_or_default();
        let output_path = working_dir.join(format!("{}.{}", output_name, extension));

        Ok(Self {
            generator_args: args,
            output_path,
        })
    }

    /// Arguments forwarded verbatim to the generator.
    pub fn generator_args(&self) -> &[String] {
        &self.generator_args
    }

    /// Absolute path of the merged file.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}
