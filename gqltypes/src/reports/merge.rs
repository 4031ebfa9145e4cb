//! Merge report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from one generate-and-merge run.
#[derive(Debug)]
pub struct MergeReport {
    /// Path of the merged file.
    pub output_path: PathBuf,
    /// Names of the merged entries, in merge order.
    pub merged_files: Vec<String>,
    /// Generator exit code, `None` when killed by a signal.
    pub generator_status: Option<i32>,
    /// Size of the merged file in bytes.
    pub bytes_written: usize,
    /// Generator output lines collapsed by the throttle.
    pub suppressed_lines: usize,
}

impl MergeReport {
    pub fn generator_succeeded(&self) -> bool {
        self.generator_status == Some(0)
    }
}

impl Report for MergeReport {
    fn render(&self, out: &mut dyn Output) {
        if !self.generator_succeeded() {
            let status = match self.generator_status {
                Some(code) => format!("status {}", code),
                None => "a signal".to_string(),
            };
            out.warning(&format!("generator exited with {}", status));
        }

        if self.merged_files.is_empty() {
            out.warning("no generated files were found; the output is empty");
        } else {
            out.section(&format!("Merged ({})", self.merged_files.len()));
            for name in &self.merged_files {
                out.added_item(name);
            }
            out.newline();
        }

        out.key_value(
            "Written",
            &format!(
                "{} ({} bytes)",
                self.output_path.display(),
                self.bytes_written
            ),
        );

        if self.suppressed_lines > 0 {
            out.key_value(
                "Repeated generator lines hidden",
                &self.suppressed_lines.to_string(),
            );
        }
    }
}
