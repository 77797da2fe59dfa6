//! Convenience re-exports for common usage.
//!
//! This module provides a single import for the most commonly used items
//! from the fabrik-core crate.
//!
//! # Example
//!
//! ```ignore
//! use fabrik_core::prelude::*;
//! ```

// Error types
pub use crate::error::{BuilderError, BuilderResult};

// Builder capability
pub use crate::builder::{AnyBuilder, Builder, BuilderCore, SlotRef};

// Registry entry and collection builders
pub use crate::collection::CollectionBuilder;
pub use crate::value::ValueBuilder;

// Factory convention
pub use crate::convention::{BuilderFactory, BuilderRequest, DefaultFactory, FactoryConvention};

// Property references
pub use crate::key::PropertyKey;
