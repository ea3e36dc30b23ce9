//! # File Entity Traits
//!
//! The contract every OS variant of a file entity satisfies.
//!
//! ## Components
//!
//! | Trait | Provides | Default |
//! |-------|----------|---------|
//! | [`FileIdentity`] | backend, raw path, symlink preference | required |
//! | [`FileStat`] | `exists`, `mode`, `owner`, `group`, `uid`, `gid`, `mtime`, `size`, `selinux_label`, `file_type` | required |
//! | [`FileContent`] | `content` | required |
//! | [`FileLink`] | `link_path` | required |
//! | [`FileVersionInfo`] | `product_version`, `file_version` | `None` |
//! | [`FileMount`] | optional [`Mountable`] capability | absent |
//!
//! ```text
//! FileIdentity + FileStat + FileContent + FileLink + FileVersionInfo + FileMount = RemoteFile
//!                                                                                    ↓
//!                                                          RemoteFileExt (derived, blanket)
//! ```
//!
//! A variant that forgets a primitive does not compile. The bare contract is
//! still available at runtime as [`UnsupportedFile`](crate::UnsupportedFile),
//! which fails every primitive with
//! [`FileError::NotImplemented`](crate::FileError::NotImplemented).
//!
//! ## Object Safety
//!
//! All traits are object-safe; [`RemoteFile`] is normally used as
//! `Box<dyn RemoteFile>`:
//!
//! ```rust
//! use remote_file::{FileError, FileStat, RemoteFile, RemoteFileExt};
//!
//! fn describe(file: &dyn RemoteFile) -> Result<String, FileError> {
//!     Ok(format!("{} is a {}", file.path()?, file.file_type()?))
//! }
//! ```

mod file_content;
mod file_identity;
mod file_link;
mod file_mount;
mod file_stat;
mod file_version;

pub use file_content::FileContent;
pub use file_identity::FileIdentity;
pub use file_link::FileLink;
pub use file_mount::{FileMount, Mountable};
pub use file_stat::FileStat;
pub use file_version::FileVersionInfo;

/// A file on some target system, inspected through commands.
///
/// # Blanket Implementation
///
/// Automatically implemented for any type implementing all component traits.
/// Never implement `RemoteFile` directly.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use remote_file::{Backend, LinuxFile, LocalBackend, RemoteFile, RemoteFileExt};
///
/// let backend: Arc<dyn Backend> = Arc::new(LocalBackend::new());
/// let file: Box<dyn RemoteFile> = Box::new(LinuxFile::new(backend, "/etc/hostname", true));
/// assert!(!file.is_socket().unwrap_or(false));
/// ```
pub trait RemoteFile:
    FileIdentity + FileStat + FileContent + FileLink + FileVersionInfo + FileMount
{
}

// Blanket implementation
impl<T> RemoteFile for T where
    T: FileIdentity + FileStat + FileContent + FileLink + FileVersionInfo + FileMount
{
}
