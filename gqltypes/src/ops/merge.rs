//! Merge operation - generate types, combine them and clean up.

use eyre::{Context, Result};
use gqltypes_core::{
    Invocation, LogSink, OutputFile, Throttle, collect, concat, remove_temp_dir,
    strip_module_syntax,
};
use tracing::info;

use crate::{reports::MergeReport, settings::Settings};

/// Execute the merge operation.
///
/// Steps run strictly in order and any failure aborts the rest. The
/// temporary directory is only removed once the output has been written,
/// so a failed run leaves it behind for inspection.
pub fn merge<S: LogSink>(
    settings: &Settings,
    invocation: &Invocation,
    log: &mut Throttle<S>,
) -> Result<MergeReport> {
    let temp_dir = settings.temp_dir();

    info!("EXECUTING APOLLO CODE GEN");
    let outcome = settings
        .generator
        .run(
            settings.working_dir(),
            invocation.generator_args(),
            &settings.temp_dir_name,
            log,
        )
        .wrap_err("Failed to run the code generator")?;

    info!("READING GENERATED GQL TYPES");
    let files = collect(&temp_dir, &settings.filter).wrap_err("Failed to read generated types")?;

    info!("COMBINING GENERATED GQL TYPES");
    let combined = concat(&files).wrap_err("Failed to combine generated types")?;

    info!("REMOVING IMPORT AND EXPORT FROM FINAL RESULT");
    let result = strip_module_syntax(&combined);

    info!("SAVING TO FILE");
    let output = OutputFile::new(invocation.output_path(), result);
    let bytes_written = output.write().wrap_err("Failed to save merged types")?;

    info!("DONE! CLEANING UP TEMPORARY DIRECTORY");
    remove_temp_dir(&temp_dir).wrap_err("Failed to clean up")?;

    let merged_files = files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    Ok(MergeReport {
        output_path: output.path().to_path_buf(),
        merged_files,
        generator_status: outcome.status,
        bytes_written,
        suppressed_lines: log.suppressed(),
    })
}
