//! Optional mount status capability.

use crate::{CommandResult, FileError};

/// Variants that can ask the target whether a path is a mount point.
pub trait Mountable: Send + Sync {
    /// Run the mount query. Non-empty stdout means "mounted".
    fn mounted(&self) -> Result<CommandResult, FileError>;
}

/// Capability lookup for [`Mountable`].
///
/// The default reports the capability as absent, which
/// [`RemoteFileExt::is_mounted`](crate::RemoteFileExt::is_mounted) turns into
/// `false`.
pub trait FileMount: Send + Sync {
    /// The mount capability, if this variant has one.
    fn mount_capability(&self) -> Option<&dyn Mountable> {
        None
    }
}
