//! Best-effort content digests computed by hashing commands on the target.

use crate::Backend;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
    /// 128-bit MD5.
    Md5,
    /// 256-bit SHA-2.
    Sha256,
}

impl Digest {
    /// Name of the hashing command on the target.
    pub const fn command(&self) -> &'static str {
        match self {
            Digest::Md5 => "md5sum",
            Digest::Sha256 => "sha256sum",
        }
    }

    /// Number of hex characters in a digest.
    pub const fn hex_len(&self) -> usize {
        match self {
            Digest::Md5 => 32,
            Digest::Sha256 => 64,
        }
    }

    /// Take the digest prefix of hashing command output.
    ///
    /// Returns `None` for empty output. Output shorter than a full digest is
    /// returned as-is.
    pub fn extract(&self, stdout: &str) -> Option<String> {
        let value: String = stdout.chars().take(self.hex_len()).collect();
        if value.is_empty() { None } else { Some(value) }
    }
}

/// Run `<command> <path>` and extract the digest.
///
/// Backend failures are logged and collapse to `None`; a missing checksum is
/// never an error for the caller.
pub(crate) fn compute(backend: &dyn Backend, digest: Digest, path: &str) -> Option<String> {
    let command = format!("{} {}", digest.command(), path);
    match backend.run_command(&command) {
        Ok(res) => digest.extract(&res.stdout),
        Err(e) => {
            tracing::debug!(command = %command, error = %e, "checksum unavailable");
            None
        }
    }
}
