// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Pipeline steps for gen-global-gql-types.
//!
//! Each step is a plain function or type: parse the invocation, run the
//! generator, collect its files, merge them, write the result and remove
//! the temporary directory. Sequencing them is left to the caller.

mod clean;
mod collect;
mod error;
mod file;
mod generator;
mod invocation;
mod merge;
mod throttle;

pub use clean::remove_temp_dir;
pub use collect::{EntryFilter, collect};
pub use error::{Error, Result};
pub use file::OutputFile;
pub use generator::{Generator, GeneratorOutcome};
pub use invocation::Invocation;
pub use merge::{concat, strip_module_syntax};
pub use throttle::{LogSink, Throttle, TracingSink};
