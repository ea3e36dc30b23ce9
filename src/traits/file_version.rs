//! Version metadata embedded in executables.

use crate::FileError;

/// Product and file version resources.
///
/// Only Windows targets carry these. The defaults report `None` so every
/// variant exposes the same surface.
pub trait FileVersionInfo: Send + Sync {
    /// Product version string.
    fn product_version(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }

    /// File version string.
    fn file_version(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }
}
