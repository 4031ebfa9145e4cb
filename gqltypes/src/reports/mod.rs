//! Report data structures for commands.
//!
//! This module separates data collection from rendering: the merge operation
//! builds a report, then renders it to an Output target.

mod merge;
mod output;

pub use merge::MergeReport;
pub use output::{Report, TerminalOutput};
