//! Command-execution backends.
//!
//! A [`Backend`] runs a command string against some target (a remote host over
//! SSH or WinRM, or the local machine) and hands back its output. File entities
//! never touch the filesystem of the target directly; every attribute is the
//! parsed output of one or more commands sent through a backend.

use std::process::Command;
use std::sync::Arc;

use crate::FileError;

/// Output of a single command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandResult {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Exit status reported by the target (`-1` if the process was killed).
    pub exit_status: i32,
}

impl CommandResult {
    /// Build a result from its parts.
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_status: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_status,
        }
    }

    /// Returns `true` if the command exited with status 0.
    #[inline]
    pub fn success(&self) -> bool {
        self.exit_status == 0
    }
}

/// Executes commands on a target system.
///
/// # Thread Safety
///
/// Backends are shared by every file entity created against them, so
/// implementations must be `Send + Sync`. Whether concurrent commands are
/// actually run in parallel is up to the transport.
///
/// # Object Safety
///
/// This trait is object-safe; file entities hold an `Arc<dyn Backend>`.
pub trait Backend: Send + Sync {
    /// Run `command` and wait for it to finish.
    ///
    /// A command that runs and exits non-zero is still `Ok`; only transport
    /// failures are errors.
    ///
    /// # Errors
    ///
    /// - [`FileError::Command`] if the command could not be executed
    /// - [`FileError::MalformedResult`] if the transport produced no usable result
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        (**self).run_command(command)
    }
}

impl<B: Backend + ?Sized> Backend for Arc<B> {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        (**self).run_command(command)
    }
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        (**self).run_command(command)
    }
}

/// Runs commands on the local machine through `sh -c`.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    shell: String,
}

impl LocalBackend {
    /// Backend using `/bin/sh`.
    pub fn new() -> Self {
        Self::with_shell("/bin/sh")
    }

    /// Backend using a specific POSIX shell binary.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for LocalBackend {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        tracing::debug!(shell = %self.shell, command, "running local command");
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| FileError::Command {
                command: command.to_string(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8(output.stdout).map_err(|_| FileError::MalformedResult {
            command: command.to_string(),
        })?;

        Ok(CommandResult {
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_status: output.status.code().unwrap_or(-1),
        })
    }
}
