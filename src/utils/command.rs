//! Command execution utilities

use crate::error::{QfetchError, Result};
use log::debug;
use std::process::Command;

/// Execute a command, wait for it to finish, and return trimmed stdout.
///
/// The child is read to completion and reaped on every path; a non-zero
/// exit status is reported as a probe failure.
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    debug!("running {} {:?}", program, args);
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|err| QfetchError::Probe(format!("couldn't run '{}': {}", program, err)))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(QfetchError::Probe(format!(
            "command '{}' failed with exit code: {:?}",
            program,
            output.status.code()
        )))
    }
}
