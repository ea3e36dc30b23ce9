//! Core types for remote file inspection.

use std::fmt;

/// Type of a filesystem entry as reported by the target.
///
/// Any type string a variant does not recognise maps to [`FileType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FileType {
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Unix domain socket.
    Socket,
    /// Named pipe (FIFO).
    Pipe,
    /// Block device.
    BlockDevice,
    /// Character device.
    CharacterDevice,
    /// Anything else, or no information.
    #[default]
    Unknown,
}

/// `S_IFMT` and friends, as used in `st_mode`.
const S_IFMT: u32 = 0o170000;
const S_IFSOCK: u32 = 0o140000;
const S_IFLNK: u32 = 0o120000;
const S_IFREG: u32 = 0o100000;
const S_IFBLK: u32 = 0o060000;
const S_IFDIR: u32 = 0o040000;
const S_IFCHR: u32 = 0o020000;
const S_IFIFO: u32 = 0o010000;

impl FileType {
    /// The fixed vocabulary string for this type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            FileType::File => "file",
            FileType::Directory => "directory",
            FileType::Symlink => "symlink",
            FileType::Socket => "socket",
            FileType::Pipe => "pipe",
            FileType::BlockDevice => "block_device",
            FileType::CharacterDevice => "character_device",
            FileType::Unknown => "unknown",
        }
    }

    /// Parse a vocabulary string; unrecognised strings become `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s {
            "file" => FileType::File,
            "directory" => FileType::Directory,
            "symlink" => FileType::Symlink,
            "socket" => FileType::Socket,
            "pipe" => FileType::Pipe,
            "block_device" => FileType::BlockDevice,
            "character_device" => FileType::CharacterDevice,
            _ => FileType::Unknown,
        }
    }

    /// Classify a raw `st_mode` value by its format bits.
    pub const fn from_mode_bits(raw: u32) -> Self {
        match raw & S_IFMT {
            S_IFSOCK => FileType::Socket,
            S_IFLNK => FileType::Symlink,
            S_IFREG => FileType::File,
            S_IFBLK => FileType::BlockDevice,
            S_IFDIR => FileType::Directory,
            S_IFCHR => FileType::CharacterDevice,
            S_IFIFO => FileType::Pipe,
            _ => FileType::Unknown,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FileType {
    fn from(s: &str) -> Self {
        FileType::parse(s)
    }
}

/// Unix permission bits (including setuid, setgid and sticky).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Mode(u32);

impl Mode {
    /// Create from a raw mode; file type bits are masked off.
    #[inline]
    pub const fn from_bits(mode: u32) -> Self {
        Self(mode & 0o7777)
    }

    /// Get the permission bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `mask` is set.
    #[inline]
    pub const fn contains(&self, mask: u32) -> bool {
        self.0 & mask == mask
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

/// Which class of users a permission check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeOwner {
    /// Owner, group and others together.
    All,
    /// The owning user.
    Owner,
    /// The owning group.
    Group,
    /// Everyone else.
    Other,
}

/// Which access right a permission check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeAccess {
    /// `r`
    Read,
    /// `w`
    Write,
    /// `x`
    Execute,
}

/// Permission mask for an owner class and access right, e.g. `(Group, Write)` is `0o020`.
pub const fn unix_mode_mask(owner: ModeOwner, access: ModeAccess) -> u32 {
    let o = match owner {
        ModeOwner::All => 0o777,
        ModeOwner::Owner => 0o700,
        ModeOwner::Group => 0o070,
        ModeOwner::Other => 0o007,
    };
    let a = match access {
        ModeAccess::Read => 0o444,
        ModeAccess::Write => 0o222,
        ModeAccess::Execute => 0o111,
    };
    o & a
}

/// Snapshot of every attribute of a file entity, produced by
/// [`RemoteFileExt::serialize`](crate::RemoteFileExt::serialize).
///
/// Every field is always present; absent values are `None` and serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileAttributes {
    /// Whether the path exists.
    #[cfg_attr(feature = "serde", serde(rename = "exist?"))]
    pub exists: bool,
    /// Permission bits.
    pub mode: Option<Mode>,
    /// Owning user name.
    pub owner: Option<String>,
    /// Owning group name.
    pub group: Option<String>,
    /// Numeric owner id.
    pub uid: Option<u32>,
    /// Numeric group id.
    pub gid: Option<u32>,
    /// File content.
    pub content: Option<String>,
    /// Modification time, seconds since the Unix epoch.
    pub mtime: Option<i64>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// SELinux security context.
    #[cfg_attr(feature = "serde", serde(rename = "selinuxLabel"))]
    pub selinux_label: Option<String>,
    /// Path as reported by the entity (link target when following a symlink).
    pub path: String,
    /// Entry type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub file_type: FileType,
    /// Whether the entity follows symlinks.
    #[cfg_attr(feature = "serde", serde(rename = "followSymlink"))]
    pub follow_symlink: bool,
}

impl FileAttributes {
    /// Serialized key names, in serialization order.
    pub const KEYS: [&'static str; 13] = [
        "exist?",
        "mode",
        "owner",
        "group",
        "uid",
        "gid",
        "content",
        "mtime",
        "size",
        "selinuxLabel",
        "path",
        "type",
        "followSymlink",
    ];
}
