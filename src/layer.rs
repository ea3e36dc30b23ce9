//! # Layer Trait
//!
//! Tower-style middleware composition for command backends.
//!
//! ## Overview
//!
//! The [`Layer`] trait wraps a [`Backend`] to add behaviour around every
//! command it runs (logging, auditing, command rewriting, ...).
//!
//! ```text
//! Backend ──▶ Layer::layer() ──▶ Wrapped Backend
//! ```
//!
//! The crate ships one layer, [`TracingLayer`], which emits a `tracing` event
//! for every command and its exit status.
//!
//! ## Fluent Composition
//!
//! ```rust
//! use remote_file::{LayerExt, LocalBackend, TracingLayer};
//!
//! let backend = LocalBackend::new().layer(TracingLayer::new("local"));
//! # let _ = backend;
//! ```

use crate::{Backend, CommandResult, FileError};

/// A layer that wraps a backend to add functionality.
///
/// Inspired by Tower's `Layer` trait. `layer(self, backend)` consumes both the
/// layer configuration and the backend and returns the wrapped backend.
///
/// # Example
///
/// ```rust
/// use remote_file::{Backend, CommandResult, FileError, Layer};
///
/// struct Sudo<B>(B);
///
/// impl<B: Backend> Backend for Sudo<B> {
///     fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
///         self.0.run_command(&format!("sudo {command}"))
///     }
/// }
///
/// struct SudoLayer;
///
/// impl<B: Backend> Layer<B> for SudoLayer {
///     type Backend = Sudo<B>;
///
///     fn layer(self, backend: B) -> Self::Backend {
///         Sudo(backend)
///     }
/// }
/// ```
pub trait Layer<B> {
    /// The resulting backend type after applying this layer.
    type Backend;

    /// Wrap the given backend with this layer's functionality.
    fn layer(self, backend: B) -> Self::Backend;
}

/// Extension trait for fluent layer composition.
///
/// Provides `.layer()` on any [`Backend`].
pub trait LayerExt: Backend + Sized {
    /// Apply a layer to this backend.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Backend {
        layer.layer(self)
    }
}

// Blanket implementation - any sized backend gets LayerExt for free
impl<B: Backend> LayerExt for B {}

/// Layer that logs every command through `tracing`.
#[derive(Debug, Clone)]
pub struct TracingLayer {
    target: String,
}

impl TracingLayer {
    /// Create a layer; `target` is recorded on every event to tell backends apart.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl<B: Backend> Layer<B> for TracingLayer {
    type Backend = TracingBackend<B>;

    fn layer(self, backend: B) -> Self::Backend {
        TracingBackend {
            inner: backend,
            target: self.target,
        }
    }
}

/// Backend produced by [`TracingLayer`].
#[derive(Debug, Clone)]
pub struct TracingBackend<B> {
    inner: B,
    target: String,
}

impl<B> TracingBackend<B> {
    /// The wrapped backend.
    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backend> Backend for TracingBackend<B> {
    fn run_command(&self, command: &str) -> Result<CommandResult, FileError> {
        tracing::debug!(backend = %self.target, command, "run_command");
        match self.inner.run_command(command) {
            Ok(res) => {
                tracing::debug!(
                    backend = %self.target,
                    command,
                    exit_status = res.exit_status,
                    stdout_len = res.stdout.len(),
                    "command finished"
                );
                Ok(res)
            }
            Err(e) => {
                tracing::warn!(backend = %self.target, command, error = %e, "command failed");
                Err(e)
            }
        }
    }
}
