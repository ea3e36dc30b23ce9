//! Choosing a variant for a target OS family.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::stat::StatDialect;
use crate::{
    Backend, LinuxFile, LocalFile, QnxFile, RemoteFile, UnixFile, UnsupportedFile, WindowsFile,
};

/// OS family of the target a backend talks to.
///
/// Detecting the family is the caller's job; this only maps a known family to
/// the matching file variant.
///
/// # Example
///
/// ```rust
/// use remote_file::OsFamily;
///
/// assert_eq!("darwin".parse::<OsFamily>().unwrap(), OsFamily::Bsd);
/// assert_eq!("plan9".parse::<OsFamily>().unwrap(), OsFamily::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OsFamily {
    /// Generic Unix with GNU `stat`.
    Unix,
    /// BSD family, including macOS.
    Bsd,
    /// Linux distributions.
    Linux,
    /// Windows.
    Windows,
    /// QNX.
    Qnx,
    /// The machine running this process.
    Local,
    /// Anything else.
    #[default]
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl OsFamily {
    /// Canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Unix => "unix",
            OsFamily::Bsd => "bsd",
            OsFamily::Linux => "linux",
            OsFamily::Windows => "windows",
            OsFamily::Qnx => "qnx",
            OsFamily::Local => "local",
            OsFamily::Unknown => "unknown",
        }
    }

    /// Map an OS or family name (case-insensitive) to a family.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "unix" | "solaris" | "aix" | "hpux" => OsFamily::Unix,
            "bsd" | "darwin" | "macos" | "mac_os_x" | "freebsd" | "openbsd" | "netbsd" => {
                OsFamily::Bsd
            }
            "linux" => OsFamily::Linux,
            "windows" => OsFamily::Windows,
            "qnx" => OsFamily::Qnx,
            "local" => OsFamily::Local,
            _ => OsFamily::Unknown,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(OsFamily::from_name(s))
    }
}

/// Create the file entity variant for `family`.
///
/// [`OsFamily::Unknown`] yields an [`UnsupportedFile`], whose primitives all
/// fail with `NotImplemented`.
pub fn open_file(
    family: OsFamily,
    backend: Arc<dyn Backend>,
    path: impl Into<String>,
    follow_symlink: bool,
) -> Box<dyn RemoteFile> {
    let path = path.into();
    tracing::debug!(%family, path = %path, follow_symlink, "opening file entity");
    match family {
        OsFamily::Unix => Box::new(UnixFile::new(backend, path, follow_symlink)),
        OsFamily::Bsd => Box::new(UnixFile::with_dialect(
            backend,
            path,
            follow_symlink,
            StatDialect::Bsd,
        )),
        OsFamily::Linux => Box::new(LinuxFile::new(backend, path, follow_symlink)),
        OsFamily::Windows => Box::new(WindowsFile::new(backend, path, follow_symlink)),
        OsFamily::Qnx => Box::new(QnxFile::new(backend, path, follow_symlink)),
        OsFamily::Local => Box::new(LocalFile::new(backend, path, follow_symlink)),
        OsFamily::Unknown => Box::new(UnsupportedFile::new(backend, path, follow_symlink)),
    }
}
