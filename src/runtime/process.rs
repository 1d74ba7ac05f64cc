//! Process execution seam.
//!
//! Every external invocation goes through [`ProcessRunner`] so tests can
//! substitute a fake and assert on invocation arguments without spawning
//! real processes.

use crate::core::error::{Error, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Capability for running external programs.
pub trait ProcessRunner {
    /// Run to completion with stdio attached to the invoking terminal.
    ///
    /// Blocks until the child exits. Used for everything the operator
    /// watches or interacts with (builds, shells, the serial bridge).
    fn run_streamed(&self, program: &str, args: &[String]) -> Result<RunOutcome>;

    /// Run to completion capturing stdout and stderr.
    ///
    /// Used for queries whose output the dispatcher inspects (the
    /// reachability probe).
    fn run_captured(&self, program: &str, args: &[String]) -> Result<Captured>;
}

/// Result of a streamed external invocation.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    /// Exit code of the child process.
    pub exit_code: i32,

    /// Whether the child exited successfully.
    pub success: bool,
}

impl RunOutcome {
    /// Create a new run outcome.
    pub fn new(exit_code: i32, success: bool) -> Self {
        Self { exit_code, success }
    }

    /// Create a successful outcome with exit code 0.
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            success: true,
        }
    }

    /// Create a failed outcome with the given exit code.
    pub fn failed(exit_code: i32) -> Self {
        Self {
            exit_code,
            success: false,
        }
    }
}

/// Captured output of an external invocation.
#[derive(Debug, Clone)]
pub struct Captured {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// [`ProcessRunner`] backed by `std::process::Command`.
///
/// The working directory is fixed at construction rather than inherited
/// from ambient process state.
pub struct SystemRunner {
    workdir: PathBuf,
}

impl SystemRunner {
    /// Create a runner that spawns children in `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn run_streamed(&self, program: &str, args: &[String]) -> Result<RunOutcome> {
        let status = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::process(format!("failed to execute {}: {}", program, e)))?;

        Ok(RunOutcome::new(
            status.code().unwrap_or(-1),
            status.success(),
        ))
    }

    fn run_captured(&self, program: &str, args: &[String]) -> Result<Captured> {
        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| Error::process(format!("failed to execute {}: {}", program, e)))?;

        Ok(Captured {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        })
    }
}
