//! External command execution.

use crate::error::{DeskwriteError, Result};
use std::ffi::OsString;
use std::process::Command;
use tracing::debug;

/// Runs an external program to completion.
///
/// Implementations report a spawn failure or a non-zero exit as
/// [`DeskwriteError::Execution`].
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        (**self).run(program, args)
    }
}

/// Blocking runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[OsString]) -> Result<()> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| DeskwriteError::Execution {
                program: program.to_string(),
                message: format!("failed to spawn: {}", e),
                status: None,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let mut message = match output.status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        };
        if !stderr.is_empty() {
            message.push_str(": ");
            message.push_str(stderr);
        }

        Err(DeskwriteError::Execution {
            program: program.to_string(),
            message,
            status: output.status.code(),
        })
    }
}
