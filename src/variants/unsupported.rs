//! The bare file contract, for targets no variant covers.

use std::sync::Arc;

use crate::{
    Backend, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat, FileType,
    FileVersionInfo, Mode, RemoteFile,
};

const VARIANT: &str = "File";

fn missing<T>(attribute: &'static str) -> Result<T, FileError> {
    Err(FileError::NotImplemented {
        variant: VARIANT,
        attribute,
    })
}

/// A file entity with no OS knowledge.
///
/// Identity and derived operations that need no primitive work (`source`,
/// `md5sum`, `sha256sum`, `is_mounted`, version checks) behave normally.
/// Every primitive attribute fails with [`FileError::NotImplemented`] naming
/// the attribute, so an unsupported target fails loudly on first use.
///
/// `path()` is derived: a non-following entity answers with the raw path
/// without touching any primitive, while a following one must first ask
/// whether the path is a symlink and fails naming `type`.
#[derive(Clone)]
pub struct UnsupportedFile {
    backend: Arc<dyn Backend>,
    path: String,
    follow_symlink: bool,
}

impl UnsupportedFile {
    /// Create a file entity.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        Self {
            backend,
            path: path.into(),
            follow_symlink,
        }
    }
}

impl FileIdentity for UnsupportedFile {
    fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    fn source_path(&self) -> &str {
        &self.path
    }

    fn follows_symlink(&self) -> bool {
        self.follow_symlink
    }

    fn with_follow_symlink(&self, follow_symlink: bool) -> Box<dyn RemoteFile> {
        Box::new(Self {
            follow_symlink,
            ..self.clone()
        })
    }
}

impl FileStat for UnsupportedFile {
    fn exists(&self) -> Result<bool, FileError> {
        missing("exist?")
    }

    fn mode(&self) -> Result<Option<Mode>, FileError> {
        missing("mode")
    }

    fn owner(&self) -> Result<Option<String>, FileError> {
        missing("owner")
    }

    fn group(&self) -> Result<Option<String>, FileError> {
        missing("group")
    }

    fn uid(&self) -> Result<Option<u32>, FileError> {
        missing("uid")
    }

    fn gid(&self) -> Result<Option<u32>, FileError> {
        missing("gid")
    }

    fn mtime(&self) -> Result<Option<i64>, FileError> {
        missing("mtime")
    }

    fn size(&self) -> Result<Option<u64>, FileError> {
        missing("size")
    }

    fn selinux_label(&self) -> Result<Option<String>, FileError> {
        missing("selinux_label")
    }

    fn file_type(&self) -> Result<FileType, FileError> {
        missing("type")
    }
}

impl FileContent for UnsupportedFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        missing("content")
    }
}

impl FileLink for UnsupportedFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        missing("link_path")
    }
}

impl FileVersionInfo for UnsupportedFile {}

impl FileMount for UnsupportedFile {}
