//! Symlink target resolution.

use crate::FileError;

/// Symlink support.
///
/// [`RemoteFileExt::path`](crate::RemoteFileExt::path) only calls
/// [`link_path`](FileLink::link_path) when the entity follows symlinks and the
/// unresolved view reports a symlink. A variant whose `file_type` can never
/// return [`FileType::Symlink`](crate::FileType::Symlink) will never be asked.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileLink`.
pub trait FileLink: Send + Sync {
    /// Fully resolved target path of the link.
    ///
    /// `None` if the target cannot be determined; callers then fall back to
    /// the raw path.
    fn link_path(&self) -> Result<Option<String>, FileError>;
}
