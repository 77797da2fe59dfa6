//! fabrik: composable builders for test-fixture object graphs.
//!
//! This facade crate re-exports the builder composition engine from
//! [`fabrik_core`]. Depend on `fabrik` for the public surface, or on
//! `fabrik-core` directly when pinning the engine alone.
//!
//! See the [`fabrik_core`] crate documentation for an overview of the
//! engine and a usage example.

pub use fabrik_core::*;

/// Convenience re-exports for common usage.
pub use fabrik_core::prelude;
