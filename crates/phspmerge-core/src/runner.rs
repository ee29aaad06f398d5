//! External command execution
//!
//! The build system (cmake, make) and the merger executable are opaque
//! collaborators invoked through the [`CommandRunner`] trait, so tests can
//! substitute a fake without spawning real processes.

use camino::Utf8Path;
use std::process::Command;

use crate::Result;

/// Outcome of a finished external command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Whether the command exited with status zero
    pub success: bool,

    /// The raw exit code, if the process exited normally
    pub code: Option<i32>,
}

impl CommandStatus {
    /// Status of a command that exited with code zero
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    /// Status of a command that exited with the given non-zero code
    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// Capability to run an external command to completion
pub trait CommandRunner {
    /// Run `program` with `args`, optionally in working directory `cwd`,
    /// blocking until it terminates.
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Utf8Path>,
    ) -> Result<CommandStatus>;
}

/// Production runner backed by `std::process::Command`
///
/// Standard streams are inherited, so external tool output goes straight to
/// the user.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Utf8Path>,
    ) -> Result<CommandStatus> {
        tracing::debug!("Running command: {} {:?} (cwd: {:?})", program, args, cwd);

        let mut command = Command::new(program);
        command.args(args);
        if let Some(cwd) = cwd {
            command.current_dir(cwd);
        }

        let status = command.status()?;

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
