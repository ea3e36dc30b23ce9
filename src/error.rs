//! Error types for remote file inspection.

use std::path::PathBuf;

/// File inspection error type with contextual variants.
///
/// All error variants include relevant context (attribute, command, path) where
/// applicable. Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use remote_file::FileError;
///
/// let err = FileError::NotImplemented { variant: "QNX", attribute: "mode" };
/// assert_eq!(err.to_string(), "QNX does not implement the mode() attribute");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// A primitive attribute was requested from a variant that does not provide it.
    #[error("{variant} does not implement the {attribute}() attribute")]
    NotImplemented {
        /// The variant that was asked.
        variant: &'static str,
        /// The missing attribute.
        attribute: &'static str,
    },

    /// The backend could not execute a command.
    #[error("command failed: {command} ({reason})")]
    Command {
        /// The command string that was sent to the backend.
        command: String,
        /// Why the backend gave up.
        reason: String,
    },

    /// The backend ran a command but could not produce a result structure for it.
    #[error("malformed command result: {command}")]
    MalformedResult {
        /// The command string that was sent to the backend.
        command: String,
    },

    /// Command output for an attribute could not be interpreted.
    #[error("cannot parse {attribute} from {value:?}")]
    Parse {
        /// The attribute being parsed.
        attribute: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Local I/O error with context.
    #[error("{operation} failed for {path}: {source}")]
    Io {
        /// The operation that failed.
        operation: &'static str,
        /// The path involved in the operation.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl FileError {
    /// Returns `true` if the error means a backend result was structurally absent.
    ///
    /// Checksum helpers treat this the same as empty output.
    pub fn is_malformed_result(&self) -> bool {
        matches!(self, FileError::MalformedResult { .. })
    }

    /// Returns `true` for errors raised because a variant lacks an attribute.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, FileError::NotImplemented { .. })
    }

    pub(crate) fn io(
        operation: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        FileError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
