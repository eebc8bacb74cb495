//! External toolchain invocation.
//!
//! Helpers for locating toolchain programs on `PATH` and running them to
//! completion with captured output. A non-zero exit becomes
//! [`PlatformError::ToolFailed`] carrying the program's standard error.

use std::path::PathBuf;
use std::process::Command;

use crate::common::PlatformError;

/// Locates `tool` on `PATH`.
///
/// # Errors
///
/// Returns [`PlatformError::ToolNotFound`] if no executable of that name exists.
pub fn find_tool(tool: &str) -> Result<PathBuf, PlatformError> {
    which::which(tool).map_err(|_| PlatformError::ToolNotFound {
        tool: tool.to_owned(),
    })
}

/// Runs `cmd` to completion, labelling failures with `what`.
///
/// # Errors
///
/// Returns [`PlatformError::Io`] if the process cannot be spawned and
/// [`PlatformError::ToolFailed`] if it exits unsuccessfully.
pub fn run(cmd: &mut Command, what: &str) -> Result<(), PlatformError> {
    tracing::debug!(tool = what, command = ?cmd, "running toolchain step");
    let out = cmd.output()?;
    if !out.status.success() {
        return Err(PlatformError::ToolFailed {
            tool: what.to_owned(),
            status: out.status,
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        });
    }
    Ok(())
}
