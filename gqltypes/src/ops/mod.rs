//! Core operations.
//!
//! This module contains the sequencing of the pipeline steps,
//! separated from CLI argument parsing and output rendering.

pub mod merge;

pub use merge::merge;
