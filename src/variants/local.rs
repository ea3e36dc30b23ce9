//! Local machine variant, answered from `std::fs`.

use std::fs;
use std::io::{self, ErrorKind};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

use crate::{
    Backend, FileContent, FileError, FileIdentity, FileLink, FileMount, FileStat, FileType,
    FileVersionInfo, Mode, RemoteFile, RemoteFileExt,
};

/// A file on the machine running this process.
///
/// Attributes are read with `std::fs` instead of commands. The backend is
/// still used for checksums, so pair it with a
/// [`LocalBackend`](crate::LocalBackend).
#[derive(Clone)]
pub struct LocalFile {
    backend: Arc<dyn Backend>,
    path: String,
    follow_symlink: bool,
}

impl LocalFile {
    /// Create a file entity.
    pub fn new(backend: Arc<dyn Backend>, path: impl Into<String>, follow_symlink: bool) -> Self {
        Self {
            backend,
            path: path.into(),
            follow_symlink,
        }
    }

    /// Metadata respecting the symlink preference; `None` if the path does
    /// not resolve to anything.
    fn metadata(&self) -> Result<Option<fs::Metadata>, FileError> {
        let res = if self.follow_symlink {
            fs::metadata(&self.path)
        } else {
            fs::symlink_metadata(&self.path)
        };
        match res {
            Ok(m) => Ok(Some(m)),
            Err(e) if unresolvable(&e) => Ok(None),
            Err(e) => Err(FileError::io("metadata", &self.path, e)),
        }
    }

    fn uid_gid(&self) -> Result<Option<(u32, u32)>, FileError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(self.metadata()?.map(|m| (m.uid(), m.gid())))
        }
        #[cfg(not(unix))]
        {
            Ok(None)
        }
    }
}

/// Errors meaning the path resolves to nothing, as `test -e` sees it.
fn unresolvable(e: &io::Error) -> bool {
    // `ErrorKind::FilesystemLoop` is unstable; on unix it is exactly `ELOOP`.
    #[cfg(unix)]
    let is_loop = e.raw_os_error() == Some(libc::ELOOP);
    #[cfg(not(unix))]
    let is_loop = false;
    is_loop || matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

/// User and group names from the system name service (NSS), so directory
/// accounts resolve like `stat %U` does.
#[cfg(unix)]
mod nss {
    use std::ffi::CStr;
    use std::mem::MaybeUninit;

    use libc::{c_char, c_int, size_t};

    const INITIAL_BUF: usize = 1024;
    const MAX_BUF: usize = 1 << 20;

    pub(crate) fn user_name(uid: u32) -> Option<String> {
        lookup(
            |entry: *mut libc::passwd, buf, len, result| unsafe {
                libc::getpwuid_r(uid, entry, buf, len, result)
            },
            |pw: &libc::passwd| pw.pw_name.cast_const(),
        )
    }

    pub(crate) fn group_name(gid: u32) -> Option<String> {
        lookup(
            |entry: *mut libc::group, buf, len, result| unsafe {
                libc::getgrgid_r(gid, entry, buf, len, result)
            },
            |gr: &libc::group| gr.gr_name.cast_const(),
        )
    }

    fn lookup<T>(
        mut call: impl FnMut(*mut T, *mut c_char, size_t, *mut *mut T) -> c_int,
        name: impl Fn(&T) -> *const c_char,
    ) -> Option<String> {
        let mut buf: Vec<c_char> = vec![0; INITIAL_BUF];
        loop {
            let mut entry = MaybeUninit::<T>::uninit();
            let mut result: *mut T = std::ptr::null_mut();
            let rc = call(entry.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result);
            if rc == libc::ERANGE && buf.len() < MAX_BUF {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 || result.is_null() {
                return None;
            }
            // SAFETY: on success `result` points at `entry`, whose strings live in `buf`.
            let ptr = name(unsafe { &*result });
            if ptr.is_null() {
                return None;
            }
            let cstr = unsafe { CStr::from_ptr(ptr) };
            return Some(cstr.to_string_lossy().into_owned());
        }
    }
}

fn classify(ft: fs::FileType) -> FileType {
    if ft.is_symlink() {
        return FileType::Symlink;
    }
    if ft.is_dir() {
        return FileType::Directory;
    }
    if ft.is_file() {
        return FileType::File;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;
        if ft.is_socket() {
            return FileType::Socket;
        }
        if ft.is_fifo() {
            return FileType::Pipe;
        }
        if ft.is_block_device() {
            return FileType::BlockDevice;
        }
        if ft.is_char_device() {
            return FileType::CharacterDevice;
        }
    }
    FileType::Unknown
}

impl FileIdentity for LocalFile {
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

impl FileStat for LocalFile {
    fn exists(&self) -> Result<bool, FileError> {
        Ok(self.metadata()?.is_some())
    }

    fn mode(&self) -> Result<Option<Mode>, FileError> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            Ok(self.metadata()?.map(|m| Mode::from_bits(m.permissions().mode())))
        }
        #[cfg(not(unix))]
        {
            Ok(None)
        }
    }

    fn owner(&self) -> Result<Option<String>, FileError> {
        #[cfg(unix)]
        {
            Ok(self.uid()?.and_then(nss::user_name))
        }
        #[cfg(not(unix))]
        {
            Ok(None)
        }
    }

    fn group(&self) -> Result<Option<String>, FileError> {
        #[cfg(unix)]
        {
            Ok(self.gid()?.and_then(nss::group_name))
        }
        #[cfg(not(unix))]
        {
            Ok(None)
        }
    }

    fn uid(&self) -> Result<Option<u32>, FileError> {
        Ok(self.uid_gid()?.map(|(uid, _)| uid))
    }

    fn gid(&self) -> Result<Option<u32>, FileError> {
        Ok(self.uid_gid()?.map(|(_, gid)| gid))
    }

    fn mtime(&self) -> Result<Option<i64>, FileError> {
        let Some(meta) = self.metadata()? else {
            return Ok(None);
        };
        let modified = meta
            .modified()
            .map_err(|e| FileError::io("modified", &self.path, e))?;
        Ok(Some(match modified.duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs() as i64,
            Err(e) => -(e.duration().as_secs() as i64),
        }))
    }

    fn size(&self) -> Result<Option<u64>, FileError> {
        Ok(self.metadata()?.map(|m| m.len()))
    }

    fn selinux_label(&self) -> Result<Option<String>, FileError> {
        Ok(None)
    }

    fn file_type(&self) -> Result<FileType, FileError> {
        Ok(self
            .metadata()?
            .map_or(FileType::Unknown, |m| classify(m.file_type())))
    }
}

impl FileContent for LocalFile {
    fn content(&self) -> Result<Option<String>, FileError> {
        if !self.exists()? || self.is_directory()? {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).map_err(|e| FileError::io("read", &self.path, e))?;
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

impl FileLink for LocalFile {
    fn link_path(&self) -> Result<Option<String>, FileError> {
        if !self.is_symlink()? {
            return Ok(None);
        }
        match fs::canonicalize(&self.path) {
            Ok(target) => Ok(Some(target.to_string_lossy().into_owned())),
            Err(e) if unresolvable(&e) => Ok(None),
            Err(e) => Err(FileError::io("canonicalize", &self.path, e)),
        }
    }
}

impl FileVersionInfo for LocalFile {}

impl FileMount for LocalFile {}
