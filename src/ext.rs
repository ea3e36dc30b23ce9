//! # Derived Operations
//!
//! Everything that can be computed from the primitive attributes of a
//! [`RemoteFile`], with no OS-specific command knowledge.
//!
//! [`RemoteFileExt`] is blanket-implemented, so every variant (and every
//! `dyn RemoteFile`) gets these methods for free.
//!
//! | Method | Derived from |
//! |--------|--------------|
//! | [`md5sum`](RemoteFileExt::md5sum), [`sha256sum`](RemoteFileExt::sha256sum) | backend hashing command |
//! | [`source`](RemoteFileExt::source), [`is_symlink`](RemoteFileExt::is_symlink) | unresolved view's `file_type` |
//! | [`path`](RemoteFileExt::path) | `is_symlink`, `link_path` |
//! | `is_file`, `is_directory`, ... | `file_type` |
//! | [`owned_by`](RemoteFileExt::owned_by) | `owner` |
//! | [`is_version`](RemoteFileExt::is_version) | `product_version`, `file_version` |
//! | [`is_mounted`](RemoteFileExt::is_mounted) | optional mount capability |
//! | [`serialize`](RemoteFileExt::serialize) | every primitive |

use crate::checksum::{self, Digest};
use crate::{FileAttributes, FileError, FileType, RemoteFile};

/// Derived attributes and predicates for any [`RemoteFile`].
///
/// # Example
///
/// ```rust
/// use remote_file::{FileError, RemoteFile, RemoteFileExt};
///
/// fn is_plain_file(file: &dyn RemoteFile) -> Result<bool, FileError> {
///     Ok(file.is_file()? && !file.is_symlink()?)
/// }
/// ```
pub trait RemoteFileExt: RemoteFile {
    /// MD5 digest of the content as 32 hex characters.
    ///
    /// Runs `md5sum <path>` on the target with the raw path (no quoting).
    /// Empty output and backend failures both yield `None`.
    fn md5sum(&self) -> Option<String> {
        checksum::compute(self.backend().as_ref(), Digest::Md5, self.source_path())
    }

    /// SHA-256 digest of the content as 64 hex characters.
    ///
    /// Same policy as [`md5sum`](RemoteFileExt::md5sum).
    fn sha256sum(&self) -> Option<String> {
        checksum::compute(self.backend().as_ref(), Digest::Sha256, self.source_path())
    }

    /// The unresolved view of this entity's path.
    ///
    /// Always a fresh entity of the same variant, bound to the same backend
    /// and path, with `follow_symlink = false`. Calling `source` on the result
    /// again yields an equivalent entity.
    fn source(&self) -> Box<dyn RemoteFile> {
        self.with_follow_symlink(false)
    }

    /// Whether the raw path is a symlink.
    ///
    /// Always answered by the unresolved view, so it is the same for a
    /// following and a non-following entity on the same path.
    fn is_symlink(&self) -> Result<bool, FileError> {
        let t = if self.follows_symlink() {
            self.source().file_type()?
        } else {
            self.file_type()?
        };
        Ok(t == FileType::Symlink)
    }

    /// The path this entity describes.
    ///
    /// The link target when the entity follows symlinks and the raw path is
    /// a symlink; otherwise the raw path.
    fn path(&self) -> Result<String, FileError> {
        if self.follows_symlink() && self.is_symlink()? {
            if let Some(target) = self.link_path()? {
                return Ok(target);
            }
        }
        Ok(self.source_path().to_string())
    }

    /// `file_type() == BlockDevice`
    fn is_block_device(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::BlockDevice)
    }

    /// `file_type() == CharacterDevice`
    fn is_character_device(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::CharacterDevice)
    }

    /// `file_type() == Pipe`
    fn is_pipe(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::Pipe)
    }

    /// `file_type() == File`
    fn is_file(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::File)
    }

    /// `file_type() == Socket`
    fn is_socket(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::Socket)
    }

    /// `file_type() == Directory`
    fn is_directory(&self) -> Result<bool, FileError> {
        Ok(self.file_type()? == FileType::Directory)
    }

    /// Whether the owner name equals `candidate`.
    fn owned_by(&self, candidate: &str) -> Result<bool, FileError> {
        Ok(self.owner()?.as_deref() == Some(candidate))
    }

    /// Whether `version` equals the product version or the file version.
    ///
    /// Always `false` on variants without version metadata.
    fn is_version(&self, version: &str) -> Result<bool, FileError> {
        if self.product_version()?.as_deref() == Some(version) {
            return Ok(true);
        }
        Ok(self.file_version()?.as_deref() == Some(version))
    }

    /// Whether the path is mounted.
    ///
    /// `false` when the variant has no mount capability at all; otherwise
    /// `true` iff the mount query printed something.
    fn is_mounted(&self) -> Result<bool, FileError> {
        match self.mount_capability() {
            None => Ok(false),
            Some(cap) => Ok(!cap.mounted()?.stdout.is_empty()),
        }
    }

    /// Collect every attribute into a [`FileAttributes`].
    ///
    /// Primitives are queried in declaration order, one round trip each. The
    /// first failure aborts the whole snapshot.
    fn serialize(&self) -> Result<FileAttributes, FileError> {
        let attrs = FileAttributes {
            exists: self.exists()?,
            mode: self.mode()?,
            owner: self.owner()?,
            group: self.group()?,
            uid: self.uid()?,
            gid: self.gid()?,
            content: self.content()?,
            mtime: self.mtime()?,
            size: self.size()?,
            selinux_label: self.selinux_label()?,
            path: self.path()?,
            file_type: self.file_type()?,
            follow_symlink: self.follows_symlink(),
        };
        tracing::trace!(path = %attrs.path, "serialized file attributes");
        Ok(attrs)
    }
}

// Blanket implementation - any RemoteFile gets RemoteFileExt for free
impl<F: RemoteFile + ?Sized> RemoteFileExt for F {}

// =============================================================================
// JSON Support (Feature-Gated)
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use super::*;

    /// JSON encoding of [`RemoteFileExt::serialize`].
    ///
    /// Available when the `serde` feature is enabled.
    pub trait RemoteFileJson: RemoteFileExt {
        /// Serialize every attribute to a JSON object.
        ///
        /// # Errors
        ///
        /// - any error from the underlying primitives
        /// - [`FileError::Serialization`] if encoding fails
        fn to_json(&self) -> Result<serde_json::Value, FileError> {
            let attrs = self.serialize()?;
            serde_json::to_value(attrs).map_err(|e| FileError::Serialization(e.to_string()))
        }
    }

    // Blanket implementation
    impl<F: RemoteFile + ?Sized> RemoteFileJson for F {}
}

#[cfg(feature = "serde")]
pub use json::RemoteFileJson;
