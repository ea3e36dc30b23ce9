//! QNX variant.
//!
//! QNX ships neither GNU nor BSD `stat`, so only existence, content and a
//! coarse file/directory type are available. Every other primitive fails with
//! [`FileError::NotImplemented`].

use std::sync::Arc;

use super::unix::UnixFile;
use crate::{
    Backend, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat, FileType,
    FileVersionInfo, Mode, RemoteFile,
};

const VARIANT: &str = "QNX";

fn missing<T>(attribute: &'static str) -> Result<T, FileError> {
    Err(FileError::NotImplemented {
        variant: VARIANT,
        attribute,
    })
}

/// A file on a QNX target.
///
/// `file_type` never reports a symlink, so `link_path` is never needed for
/// path resolution.
#[derive(Clone)]
pub struct QnxFile {
    unix: UnixFile,
}

impl QnxFile {
    /// Create a file entity.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        Self {
            unix: UnixFile::new(backend, path, follow_symlink),
        }
    }
}

impl FileIdentity for QnxFile {
    fn backend(&self) -> &Arc<dyn Backend> {
        self.unix.backend()
    }

    fn source_path(&self) -> &str {
        self.unix.source_path()
    }

    fn follows_symlink(&self) -> bool {
        self.unix.follows_symlink()
    }

    fn with_follow_symlink(&self, follow_symlink: bool) -> Box<dyn RemoteFile> {
        Box::new(Self::new(
            Arc::clone(self.backend()),
            self.source_path(),
            follow_symlink,
        ))
    }
}

impl FileStat for QnxFile {
    fn exists(&self) -> Result<bool, FileError> {
        self.unix.exists()
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
        let res = self.unix.run(&format!("file {}", self.unix.quoted_path()))?;
        if res.stdout.contains("directory") {
            Ok(FileType::Directory)
        } else {
            Ok(FileType::File)
        }
    }
}

impl FileContent for QnxFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        let res = self.unix.run(&format!("cat {}", self.unix.quoted_path()))?;
        if res.stdout.is_empty() && !res.success() {
            return Ok(None);
        }
        Ok(Some(res.stdout))
    }
}

impl FileLink for QnxFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        missing("link_path")
    }
}

impl FileVersionInfo for QnxFile {}

impl FileMount for QnxFile {}
