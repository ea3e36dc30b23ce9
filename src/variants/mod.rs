//! # OS Variants
//!
//! Concrete [`RemoteFile`](crate::RemoteFile) implementations, one per target
//! OS family.
//!
//! | Variant | Target | Attributes from |
//! |---------|--------|-----------------|
//! | [`UnixFile`] | generic Unix, BSD, macOS | `test`, `stat`, `cat`, `readlink` |
//! | [`LinuxFile`] | Linux | as Unix, GNU `stat` |
//! | [`QnxFile`] | QNX | `test`, `cat`, `file` (partial) |
//! | [`WindowsFile`] | Windows | PowerShell |
//! | [`LocalFile`] | this machine | `std::fs` |
//! | [`UnsupportedFile`] | anything else | nothing (every primitive fails) |

mod linux;
mod local;
mod qnx;
mod unix;
mod unsupported;
mod windows;

pub use linux::LinuxFile;
pub use local::LocalFile;
pub use qnx::QnxFile;
pub use unix::UnixFile;
pub use unsupported::UnsupportedFile;
pub use windows::WindowsFile;

use crate::{Backend, CommandResult, FileError};

/// Quote a path for a POSIX shell.
pub(crate) fn shell_quote(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('\'');
    for c in path.chars() {
        if c == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    quoted
}

pub(crate) fn run(backend: &dyn Backend, command: &str) -> Result<CommandResult, FileError> {
    tracing::trace!(command, "file attribute command");
    backend.run_command(command)
}
