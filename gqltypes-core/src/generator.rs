//! Running the external code generator.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::{
    Error, Result,
    throttle::{LogSink, Throttle},
};

/// The external generator, e.g. `apollo codegen:generate`.
#[derive(Debug, Clone)]
pub struct Generator {
    program: String,
    subcommand: String,
    target: String,
    flat: bool,
}

/// What the generator left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOutcome {
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GeneratorOutcome {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

impl Generator {
    /// Create a generator for `program` with the Apollo defaults.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            subcommand: "codegen:generate".to_string(),
            target: "typescript".to_string(),
            flat: true,
        }
    }

    pub fn subcommand(mut self, subcommand: impl Into<String>) -> Self {
        self.subcommand = subcommand.into();
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list: subcommand, fixed flags, pass-through args, then the temp dir.
    pub fn args(&self, extra: &[String], temp_dir_name: &str) -> Vec<String> {
        let mut args = vec![self.subcommand.clone(), format!("--target={}", self.target)];
        if self.flat {
            args.push("--outputFlat".to_string());
        }
        args.extend(extra.iter().cloned());
        args.push(temp_dir_name.to_string());
        args
    }

    /// Resolve a relative program path such as `./node_modules/...` against
    /// the working directory. Bare names are left for `PATH` lookup.
    fn resolve_program(&self, working_dir: &Path) -> PathBuf {
        let program = Path::new(&self.program);
        let has_separator = self.program.contains(['/', '\\']);
        if program.is_relative() && has_separator {
            working_dir.join(program)
        } else {
            program.to_path_buf()
        }
    }

    /// Build the child process without starting it.
    pub fn command(&self, working_dir: &Path, extra: &[String], temp_dir_name: &str) -> Command {
        let mut cmd = Command::new(self.resolve_program(working_dir));
        cmd.args(self.args(extra, temp_dir_name))
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Run the generator to completion.
    ///
    /// Both output streams are read in full and then forwarded line by line
    /// to `log`, stdout first. A non-zero exit is reported but is not an
    /// error: a failed generation shows up later as missing files.
    pub fn run<S: LogSink>(
        &self,
        working_dir: &Path,
        extra: &[String],
        temp_dir_name: &str,
        log: &mut Throttle<S>,
    ) -> Result<GeneratorOutcome> {
        tracing::debug!(
            program = %self.program,
            args = ?self.args(extra, temp_dir_name),
            "spawning generator"
        );

        let output = self
            .command(working_dir, extra, temp_dir_name)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let outcome = GeneratorOutcome {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in outcome.stdout.lines().chain(outcome.stderr.lines()) {
            log.log(line);
        }
        log.flush();

        if !outcome.success() {
            tracing::warn!(status = ?outcome.status, "generator exited unsuccessfully");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_layout() {
        let generator = Generator::new("./node_modules/apollo/bin/run");
        let args = generator.args(&["--queries=src/**/*.ts".to_string()], "tmp");

        assert_eq!(
            args,
            [
                "codegen:generate",
                "--target=typescript",
                "--outputFlat",
                "--queries=src/**/*.ts",
                "tmp",
            ]
        );
    }

    #[test]
    fn test_args_without_flat() {
        let generator = Generator::new("apollo")
            .subcommand("client:codegen")
            .target("flow")
            .flat(false);
        let args = generator.args(&[], "out");

        assert_eq!(args, ["client:codegen", "--target=flow", "out"]);
    }

    #[test]
    fn test_resolve_relative_program_against_working_dir() {
        let generator = Generator::new("./node_modules/apollo/bin/run");
        assert_eq!(
            generator.resolve_program(Path::new("/project")),
            Path::new("/project/./node_modules/apollo/bin/run")
        );
    }

    #[test]
    fn test_resolve_bare_program_untouched() {
        let generator = Generator::new("apollo");
        assert_eq!(
            generator.resolve_program(Path::new("/project")),
            Path::new("apollo")
        );
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let generator = Generator::new("./does/not/exist");
        let mut log = Throttle::new(Vec::new());

        let err = generator
            .run(temp.path(), &[], "tmp", &mut log)
            .unwrap_err();

        assert!(matches!(err, Error::Spawn { .. }));
        assert!(log.into_sink().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_forwards_output_and_tolerates_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("gen.sh");
        std::fs::write(
            &script,
            "echo progress\necho progress\necho broken >&2\nexit 3\n",
        )
        .unwrap();

        // sh gen.sh --target=ignored tmp
        let generator = Generator::new("sh")
            .subcommand(script.display().to_string())
            .target("ignored")
            .flat(false);
        let mut log = Throttle::new(Vec::new());

        let outcome = generator.run(temp.path(), &[], "tmp", &mut log).unwrap();

        assert_eq!(outcome.status, Some(3));
        assert!(!outcome.success());
        assert_eq!(outcome.stderr, "broken\n");
        assert_eq!(
            log.into_sink(),
            ["progress", "(previous message repeated 1 times)", "broken"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_receives_arguments_in_working_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        let script = temp.path().join("gen.sh");
        std::fs::write(
            &script,
            "mkdir \"$4\"\nprintf '%s\\n' \"$1 $2 $3\" > \"$4/args.txt\"\n",
        )
        .unwrap();

        let generator = Generator::new("sh").subcommand(script.display().to_string());
        let mut log = Throttle::new(Vec::new());

        let outcome = generator
            .run(temp.path(), &["--queries=q".to_string()], "out", &mut log)
            .unwrap();

        assert!(outcome.success());
        let written = std::fs::read_to_string(temp.path().join("out/args.txt")).unwrap();
        assert_eq!(written, "--target=typescript --outputFlat --queries=q\n");
    }
}
