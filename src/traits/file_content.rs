//! File content.

use crate::FileError;

/// Content of the file as text.
pub trait FileContent: Send + Sync {
    /// The file content.
    ///
    /// `None` when there is nothing to read (missing path, directory). An
    /// empty regular file is `Some("")`.
    fn content(&self) -> Result<Option<String>, FileError>;
}
