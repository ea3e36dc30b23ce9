//! Linux variant.

use std::sync::Arc;

use super::unix::UnixFile;
use crate::{
    Backend, CommandResult, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat,
    FileType, FileVersionInfo, Mode, Mountable, RemoteFile, RemoteFileExt,
};

/// A file on a Linux target.
///
/// Behaves like [`UnixFile`] with GNU `stat`, but reads content in one round
/// trip and only asks for more when the read came back empty.
#[derive(Clone)]
pub struct LinuxFile {
    unix: UnixFile,
}

impl LinuxFile {
    /// Create a file entity.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        Self {
            unix: UnixFile::new(backend, path, follow_symlink),
        }
    }

    /// The Unix view of this file, for the Unix-only helpers.
    pub fn as_unix(&self) -> &UnixFile {
        &self.unix
    }
}

impl FileIdentity for LinuxFile {
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

impl FileStat for LinuxFile {
    fn exists(&self) -> Result<bool, FileError> {
        self.unix.exists()
    }

    fn mode(&self) -> Result<Option<Mode>, FileError> {
        self.unix.mode()
    }

    fn owner(&self) -> Result<Option<String>, FileError> {
        self.unix.owner()
    }

    fn group(&self) -> Result<Option<String>, FileError> {
        self.unix.group()
    }

    fn uid(&self) -> Result<Option<u32>, FileError> {
        self.unix.uid()
    }

    fn gid(&self) -> Result<Option<u32>, FileError> {
        self.unix.gid()
    }

    fn mtime(&self) -> Result<Option<i64>, FileError> {
        self.unix.mtime()
    }

    fn size(&self) -> Result<Option<u64>, FileError> {
        self.unix.size()
    }

    fn selinux_label(&self) -> Result<Option<String>, FileError> {
        self.unix.selinux_label()
    }

    fn file_type(&self) -> Result<FileType, FileError> {
        self.unix.file_type()
    }
}

impl FileContent for LinuxFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        let res = self
            .unix
            .run(&format!("cat {} || echo -n", self.unix.quoted_path()))?;
        if !res.stdout.is_empty() {
            return Ok(Some(res.stdout));
        }
        // empty read: a real empty file, or nothing readable at all
        if self.is_directory()? {
            return Ok(None);
        }
        match self.size()? {
            Some(0) => Ok(Some(String::new())),
            _ => Ok(None),
        }
    }
}

impl FileLink for LinuxFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        self.unix.link_path()
    }
}

impl FileVersionInfo for LinuxFile {}

impl Mountable for LinuxFile {
    fn mounted(&self) -> Result<CommandResult, FileError> {
        self.unix.mounted()
    }
}

impl FileMount for LinuxFile {
    fn mount_capability(&self) -> Option<&dyn Mountable> {
        Some(self)
    }
}
