//! Generic Unix variant.

use std::sync::Arc;

use super::{run, shell_quote};
use crate::stat::{StatDialect, StatInfo};
use crate::{
    Backend, CommandResult, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat,
    FileType, FileVersionInfo, Mode, Mountable, RemoteFile, RemoteFileExt,
};

/// A file on a Unix-like target, inspected with POSIX tools.
///
/// Stat attributes come from a single `stat` call per attribute access. Pick
/// the [`StatDialect`] matching the target's `stat(1)`.
#[derive(Clone)]
pub struct UnixFile {
    backend: Arc<dyn Backend>,
    path: String,
    quoted: String,
    follow_symlink: bool,
    dialect: StatDialect,
}

impl UnixFile {
    /// File entity using GNU `stat`.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        Self::with_dialect(backend, path, follow_symlink, StatDialect::Gnu)
    }

    /// File entity using the given `stat` dialect.
    pub fn with_dialect(
        backend: Arc<dyn Backend>,
        path: impl Into<String>,
        follow_symlink: bool,
        dialect: StatDialect,
    ) -> Self {
        let path = path.into();
        Self {
            quoted: shell_quote(&path),
            backend,
            path,
            follow_symlink,
            dialect,
        }
    }

    /// The `stat` dialect in use.
    pub fn dialect(&self) -> StatDialect {
        self.dialect
    }

    /// The path as interpolated into commands.
    pub fn quoted_path(&self) -> &str {
        &self.quoted
    }

    pub(crate) fn run(&self, command: &str) -> Result<CommandResult, FileError> {
        run(self.backend.as_ref(), command)
    }

    fn stat(&self) -> Result<Option<StatInfo>, FileError> {
        let res = self.run(&self.dialect.command(&self.quoted, self.follow_symlink))?;
        self.dialect.parse(&res)
    }

    fn stat_field<T>(&self, f: impl FnOnce(StatInfo) -> T) -> Result<Option<T>, FileError> {
        Ok(self.stat()?.map(f))
    }

    /// Immediate target of the link (one `readlink` hop), `None` if not a symlink.
    pub fn shallow_link_path(&self) -> Result<Option<String>, FileError> {
        if !self.is_symlink()? {
            return Ok(None);
        }
        let res = self.run(&format!("readlink {}", self.quoted))?;
        Ok(non_empty(res.stdout.trim_end_matches('\n')))
    }

    /// Whether the permission bits equal `mode` exactly.
    pub fn has_mode(&self, mode: u32) -> Result<bool, FileError> {
        Ok(self.mode()?.map(|m| m.bits()) == Some(mode))
    }

    /// Whether the owning group is `group`.
    pub fn grouped_into(&self, group: &str) -> Result<bool, FileError> {
        Ok(self.group()?.as_deref() == Some(group))
    }

    /// Whether this is a symlink resolving to `target`.
    pub fn linked_to(&self, target: &str) -> Result<bool, FileError> {
        Ok(self.link_path()?.as_deref() == Some(target))
    }

    /// Content rule shared by Unix-like variants: nothing for missing paths
    /// and directories, empty for zero-size files, `cat` otherwise.
    pub(crate) fn cat_content(&self) -> Result<Option<String>, FileError> {
        if !self.exists()? || self.is_directory()? {
            return Ok(None);
        }
        match self.size()? {
            None | Some(0) => Ok(Some(String::new())),
            Some(_) => Ok(Some(self.run(&format!("cat {}", self.quoted))?.stdout)),
        }
    }
}

pub(crate) fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

impl FileIdentity for UnixFile {
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

impl FileStat for UnixFile {
    fn exists(&self) -> Result<bool, FileError> {
        let mut command = format!("test -e {}", self.quoted);
        if !self.follow_symlink {
            command.push_str(&format!(" || test -L {}", self.quoted));
        }
        Ok(self.run(&command)?.success())
    }

    fn mode(&self) -> Result<Option<Mode>, FileError> {
        self.stat_field(|s| s.mode)
    }

    fn owner(&self) -> Result<Option<String>, FileError> {
        self.stat_field(|s| s.owner)
    }

    fn group(&self) -> Result<Option<String>, FileError> {
        self.stat_field(|s| s.group)
    }

    fn uid(&self) -> Result<Option<u32>, FileError> {
        self.stat_field(|s| s.uid)
    }

    fn gid(&self) -> Result<Option<u32>, FileError> {
        self.stat_field(|s| s.gid)
    }

    fn mtime(&self) -> Result<Option<i64>, FileError> {
        self.stat_field(|s| s.mtime)
    }

    fn size(&self) -> Result<Option<u64>, FileError> {
        self.stat_field(|s| s.size)
    }

    fn selinux_label(&self) -> Result<Option<String>, FileError> {
        Ok(self.stat()?.and_then(|s| s.selinux_label))
    }

    fn file_type(&self) -> Result<FileType, FileError> {
        Ok(self.stat()?.map_or(FileType::Unknown, |s| s.file_type))
    }
}

impl FileContent for UnixFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        self.cat_content()
    }
}

impl FileLink for UnixFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        if !self.is_symlink()? {
            return Ok(None);
        }
        let res = self.run(&format!("readlink -n {} -f", self.quoted))?;
        Ok(non_empty(&res.stdout))
    }
}

impl FileVersionInfo for UnixFile {}

impl Mountable for UnixFile {
    fn mounted(&self) -> Result<CommandResult, FileError> {
        self.run(&format!("mount | grep -- ' on {} '", self.path))
    }
}

impl FileMount for UnixFile {
    fn mount_capability(&self) -> Option<&dyn Mountable> {
        Some(self)
    }
}
