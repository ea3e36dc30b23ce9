//! # remote-file
//!
//! One file abstraction for many operating systems, computed from the output
//! of commands instead of local filesystem calls.
//!
//! A file entity is bound to a [`Backend`] (anything that can run a command
//! on a target and return its output), a path, and a symlink-following
//! preference. Every attribute access runs fresh commands through the backend
//! and parses their output; nothing is cached and nothing is written.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use remote_file::{open_file, Backend, FileError, FileStat, LocalBackend, OsFamily, RemoteFileExt};
//!
//! fn report(backend: Arc<dyn Backend>, family: OsFamily) -> Result<(), FileError> {
//!     let file = open_file(family, backend, "/etc/hosts", true);
//!     if file.exists()? && file.is_file()? {
//!         println!("{} owned by {:?}", file.path()?, file.owner()?);
//!         println!("md5 {:?}", file.md5sum());
//!     }
//!     Ok(())
//! }
//!
//! # let _ = report(Arc::new(LocalBackend::new()), OsFamily::Local);
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Backend`] | Runs command strings on a target |
//! | [`RemoteFile`] | The file entity contract every OS variant implements |
//! | [`RemoteFileExt`] | Derived operations: checksums, symlink views, predicates, `serialize` |
//! | [`FileAttributes`] | Snapshot returned by `serialize` |
//! | [`FileType`] | `file`, `directory`, `symlink`, `socket`, `pipe`, devices, `unknown` |
//! | [`FileError`] | Error type with context |
//! | [`OsFamily`] / [`open_file`] | Pick the variant for a target |
//!
//! ---
//!
//! ## Variants
//!
//! [`UnixFile`], [`LinuxFile`], [`QnxFile`], [`WindowsFile`], [`LocalFile`],
//! and [`UnsupportedFile`] (the bare contract: every primitive fails with
//! [`FileError::NotImplemented`]).
//!
//! ---
//!
//! ## Symlinks
//!
//! [`is_symlink`](RemoteFileExt::is_symlink) always looks at the raw path,
//! while [`file_type`](FileStat::file_type) and [`path`](RemoteFileExt::path)
//! follow the link when the entity was created with `follow_symlink = true`.
//! [`source`](RemoteFileExt::source) gives the non-following view.
//!
//! ---
//!
//! ## Error Handling
//!
//! Primitive attributes return `Result<_, FileError>` and propagate backend
//! failures unchanged. Checksums are the exception: any failure is reported as
//! `None`.
//!
//! ```rust
//! use remote_file::FileError;
//!
//! let err = FileError::NotImplemented { variant: "File", attribute: "content" };
//! assert_eq!(err.to_string(), "File does not implement the content() attribute");
//! ```
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync`. Entities share their backend through an
//! `Arc<dyn Backend>`; concurrent use is as safe as the backend makes it.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` (default) | Serialization for [`FileAttributes`], [`FileType`], [`OsFamily`]; adds [`RemoteFileJson`] |

// Private modules
mod backend;
mod checksum;
mod error;
mod ext;
mod family;
mod layer;
mod stat;
mod traits;
mod types;
mod variants;

// Public re-exports - error types
pub use error::FileError;

// Public re-exports - core types
pub use types::{FileAttributes, FileType, Mode, ModeAccess, ModeOwner, unix_mode_mask};

// Public re-exports - backends
pub use backend::{Backend, CommandResult, LocalBackend};
pub use layer::{Layer, LayerExt, TracingBackend, TracingLayer};

// Public re-exports - file entity contract
pub use traits::{
    FileContent, FileIdentity, FileLink, FileMount, FileStat, FileVersionInfo, Mountable,
    RemoteFile,
};

// Public re-exports - derived operations
pub use checksum::Digest;
pub use ext::RemoteFileExt;

// Public re-exports - variants
pub use family::{OsFamily, open_file};
pub use stat::{StatDialect, StatInfo};
pub use variants::{LinuxFile, LocalFile, QnxFile, UnixFile, UnsupportedFile, WindowsFile};

// Conditional re-exports
#[cfg(feature = "serde")]
pub use ext::RemoteFileJson;
