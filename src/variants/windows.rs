//! Windows variant, driven by PowerShell.

use std::sync::Arc;

use super::run;
use super::unix::non_empty;
use crate::{
    Backend, CommandResult, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat,
    FileType, FileVersionInfo, Mode, RemoteFile, RemoteFileExt,
};

/// A file on a Windows target.
///
/// Unix-only attributes (`mode`, `group`, `uid`, `gid`, `selinux_label`) and
/// `mtime` are always `None`. Product and file version come from the
/// executable's version resource.
#[derive(Clone)]
pub struct WindowsFile {
    backend: Arc<dyn Backend>,
    path: String,
    sanitized: String,
    follow_symlink: bool,
}

/// Characters that can never appear in a Windows path. `:` and both slashes
/// are kept since they are path syntax.
const INVALID_CHARS: [char; 6] = ['<', '>', '"', '|', '?', '*'];

impl WindowsFile {
    /// Create a file entity.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        let path = path.into();
        Self {
            sanitized: path.chars().filter(|c| !INVALID_CHARS.contains(c)).collect(),
            backend,
            path,
            follow_symlink,
        }
    }

    /// The path as interpolated into PowerShell commands.
    pub fn sanitized_path(&self) -> &str {
        &self.sanitized
    }

    fn run(&self, command: &str) -> Result<CommandResult, FileError> {
        run(self.backend.as_ref(), command)
    }

    fn attributes(&self) -> Result<Vec<String>, FileError> {
        let res = self.run(&format!(
            "(Get-ItemProperty -Path \"{}\").attributes.ToString()",
            self.sanitized
        ))?;
        Ok(res
            .stdout
            .trim_end()
            .split(',')
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect())
    }

    fn version_info(&self, field: &str) -> Result<Option<String>, FileError> {
        let res = self.run(&format!(
            "[System.Diagnostics.FileVersionInfo]::GetVersionInfo(\"{}\").{field}",
            self.sanitized
        ))?;
        Ok(non_empty(res.stdout.trim_end_matches(['\r', '\n'])))
    }
}

impl FileIdentity for WindowsFile {
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

impl FileStat for WindowsFile {
    fn exists(&self) -> Result<bool, FileError> {
        let res = self.run(&format!(
            "(Test-Path -Path \"{}\").ToString()",
            self.sanitized
        ))?;
        Ok(res.stdout.trim_end() == "True")
    }

    fn mode(&self) -> Result<Option<Mode>, FileError> {
        Ok(None)
    }

    fn owner(&self) -> Result<Option<String>, FileError> {
        let res = self.run(&format!(
            "Get-Acl \"{}\" | select -expand Owner",
            self.sanitized
        ))?;
        Ok(non_empty(res.stdout.trim()))
    }

    fn group(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }

    fn uid(&self) -> Result<Option<u32>, FileError> {
        Ok(None)
    }

    fn gid(&self) -> Result<Option<u32>, FileError> {
        Ok(None)
    }

    fn mtime(&self) -> Result<Option<i64>, FileError> {
        Ok(None)
    }

    fn size(&self) -> Result<Option<u64>, FileError> {
        if !self.is_file()? {
            return Ok(None);
        }
        let res = self.run(&format!("((Get-Item '{}').Length)", self.sanitized))?;
        let raw = res.stdout.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(|_| FileError::Parse {
            attribute: "size",
            value: raw.to_string(),
        })
    }

    fn selinux_label(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }

    fn file_type(&self) -> Result<FileType, FileError> {
        let attrs = self.attributes()?;
        let has = |name: &str| attrs.iter().any(|a| a == name);
        Ok(if has("Archive") && !has("Directory") {
            FileType::File
        } else if has("ReparsePoint") {
            FileType::Symlink
        } else if has("Directory") {
            FileType::Directory
        } else {
            FileType::Unknown
        })
    }
}

impl FileContent for WindowsFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        let res = self.run(&format!(
            "Get-Content(\"{}\") | Out-String",
            self.sanitized
        ))?;
        if res.stdout.is_empty() && self.is_directory()? {
            return Ok(None);
        }
        Ok(Some(res.stdout))
    }
}

impl FileLink for WindowsFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }
}

impl FileVersionInfo for WindowsFile {
    fn product_version(&self) -> Result<Option<String>, FileError> {
        self.version_info("ProductVersion")
    }

    fn file_version(&self) -> Result<Option<String>, FileError> {
        self.version_info("FileVersion")
    }
}

impl FileMount for WindowsFile {}
