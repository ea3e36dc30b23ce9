//! Identity of a file entity: backend, raw path and symlink preference.

use std::sync::Arc;

use crate::{Backend, RemoteFile};

/// The immutable `(backend, path, follow_symlink)` triple of a file entity.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileIdentity`.
pub trait FileIdentity: Send + Sync {
    /// The backend every attribute command goes through.
    fn backend(&self) -> &Arc<dyn Backend>;

    /// The path exactly as supplied at construction, never resolved.
    ///
    /// May be empty.
    fn source_path(&self) -> &str;

    /// Whether attribute access describes the target of a symlink rather than
    /// the link itself.
    fn follows_symlink(&self) -> bool;

    /// Construct the same variant for the same backend and path with a
    /// different symlink preference.
    fn with_follow_symlink(&self, follow_symlink: bool) -> Box<dyn RemoteFile>;
}
