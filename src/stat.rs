//! `stat(1)` command construction and output parsing.

use crate::{CommandResult, FileError, FileType, Mode};

/// Flavour of `stat(1)` available on a Unix target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StatDialect {
    /// GNU coreutils (`--printf`), with SELinux context.
    #[default]
    Gnu,
    /// BSD and macOS (`-f`).
    Bsd,
}

/// Everything one `stat` call reports about a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatInfo {
    /// Entry type from the format bits.
    pub file_type: FileType,
    /// Permission bits.
    pub mode: Mode,
    /// Owner name.
    pub owner: String,
    /// Owner id.
    pub uid: u32,
    /// Group name.
    pub group: String,
    /// Group id.
    pub gid: u32,
    /// Modification time (epoch seconds).
    pub mtime: i64,
    /// Size in bytes.
    pub size: u64,
    /// SELinux context, GNU only.
    pub selinux_label: Option<String>,
}

impl StatDialect {
    /// Build the stat command for an already shell-quoted path.
    pub fn command(&self, quoted_path: &str, follow_symlink: bool) -> String {
        let deref = if follow_symlink { " -L" } else { "" };
        match self {
            StatDialect::Gnu => format!(
                "stat{deref} {quoted_path} 2>/dev/null --printf '%s\\n%f\\n%U\\n%u\\n%G\\n%g\\n%X\\n%Y\\n%C'"
            ),
            StatDialect::Bsd => format!(
                "stat{deref} -f '%z\\n%p\\n%Su\\n%u\\n%Sg\\n%g\\n%a\\n%m' {quoted_path}"
            ),
        }
    }

    /// Parse stat output.
    ///
    /// `Ok(None)` means stat had nothing to say (missing path, truncated
    /// output). The GNU exit status is ignored because it is non-zero on hosts
    /// without SELinux even when every other field is present.
    pub fn parse(&self, res: &CommandResult) -> Result<Option<StatInfo>, FileError> {
        let fields: Vec<&str> = res.stdout.lines().collect();
        match self {
            StatDialect::Gnu => {
                if fields.len() < 9 {
                    return Ok(None);
                }
                let raw = u32::from_str_radix(fields[1], 16)
                    .map_err(|_| parse_err("mode", fields[1]))?;
                let selinux_label = match fields[8] {
                    "?" | "(null)" | "C" | "" => None,
                    label => Some(label.to_string()),
                };
                Ok(Some(StatInfo {
                    selinux_label,
                    ..common(&fields, raw)?
                }))
            }
            StatDialect::Bsd => {
                if !res.success() || fields.len() < 8 {
                    return Ok(None);
                }
                let raw = u32::from_str_radix(fields[1], 8)
                    .map_err(|_| parse_err("mode", fields[1]))?;
                common(&fields, raw).map(Some)
            }
        }
    }
}

fn common(fields: &[&str], raw: u32) -> Result<StatInfo, FileError> {
    let info = StatInfo {
        file_type: FileType::from_mode_bits(raw),
        mode: Mode::from_bits(raw),
        owner: fields[2].to_string(),
        uid: number("uid", fields[3])?,
        group: fields[4].to_string(),
        gid: number("gid", fields[5])?,
        mtime: number("mtime", fields[7])?,
        size: number("size", fields[0])?,
        selinux_label: None,
    };
    tracing::trace!(?info, "parsed stat output");
    Ok(info)
}

fn number<T: std::str::FromStr>(attribute: &'static str, value: &str) -> Result<T, FileError> {
    value.trim().parse().map_err(|_| parse_err(attribute, value))
}

fn parse_err(attribute: &'static str, value: &str) -> FileError {
    FileError::Parse {
        attribute,
        value: value.to_string(),
    }
}
