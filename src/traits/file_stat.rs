//! Primitive stat-like attributes.

use crate::{FileError, FileType, Mode};

/// Stat-like primitive attributes every variant must answer.
///
/// Each call may run one or more commands on the target; nothing is cached
/// between calls. Attributes the target legitimately cannot report are
/// `Ok(None)`.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileStat`.
pub trait FileStat: Send + Sync {
    /// Whether the path exists.
    ///
    /// An entity that does not follow symlinks also reports a dangling link
    /// as existing.
    fn exists(&self) -> Result<bool, FileError>;

    /// Permission bits.
    fn mode(&self) -> Result<Option<Mode>, FileError>;

    /// Owning user name.
    fn owner(&self) -> Result<Option<String>, FileError>;

    /// Owning group name.
    fn group(&self) -> Result<Option<String>, FileError>;

    /// Numeric owner id.
    fn uid(&self) -> Result<Option<u32>, FileError>;

    /// Numeric group id.
    fn gid(&self) -> Result<Option<u32>, FileError>;

    /// Modification time in seconds since the Unix epoch.
    fn mtime(&self) -> Result<Option<i64>, FileError>;

    /// Size in bytes.
    fn size(&self) -> Result<Option<u64>, FileError>;

    /// SELinux security context, `None` where labels are unsupported.
    fn selinux_label(&self) -> Result<Option<String>, FileError>;

    /// Entry type, respecting this entity's symlink preference.
    fn file_type(&self) -> Result<FileType, FileError>;
}
