//! Reload trigger for the consuming service
//!
//! Invokes the external service-reload command synchronously and reports
//! its outcome. Success is the child's exit status alone; file contents
//! are never validated here. The command typically requires elevated
//! privilege, so failing to start at all and exiting non-zero are
//! surfaced as distinct errors.

use std::process::Command;

use crate::error::{Error, Result};

/// The external service-reload command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadCommand {
    /// Program to execute
    pub program: String,
    /// Arguments to pass to the program
    pub args: Vec<String>,
}

impl Default for ReloadCommand {
    /// `nginx -s reload`
    fn default() -> Self {
        Self {
            program: "nginx".to_string(),
            args: vec!["-s".to_string(), "reload".to_string()],
        }
    }
}

impl ReloadCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Captured output of a successful reload invocation.
#[derive(Debug)]
pub struct ReloadOutcome {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

/// Run the reload command to completion.
///
/// Blocks until the child exits. Returns [`Error::ReloadUnavailable`]
/// when the process cannot start and [`Error::ReloadFailed`] (carrying
/// the exit code and trimmed stderr) when it exits non-zero.
pub fn reload(command: &ReloadCommand) -> Result<ReloadOutcome> {
    tracing::debug!(program = %command.program, "invoking service reload");

    let output = Command::new(&command.program)
        .args(&command.args)
        .output()
        .map_err(|e| Error::ReloadUnavailable {
            program: command.program.clone(),
            source: e,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    if !output.status.success() {
        return Err(Error::ReloadFailed {
            program: command.program.clone(),
            code: output.status.code(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(ReloadOutcome {
        stdout,
        stderr,
        exit_code: output.status.code(),
    })
}
