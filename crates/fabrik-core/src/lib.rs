//! Composable builders for assembling test-fixture object graphs.
//!
//! This crate provides the builder composition engine of the fabrik
//! toolkit:
//!
//! - **Builder capability**: per-subject builders with a property-override
//!   registry, deferred setups, and post-construction customizations
//! - **Composition**: nested builders and ordered collection builders
//!   resolved recursively through one shared creation strategy
//! - **Factory convention**: a pluggable, tree-shared strategy for
//!   instantiating builders by requested type
//!
//! # Quick Start
//!
//! Define a builder for a subject by embedding a [`BuilderCore`] and
//! implementing [`Builder::assemble`]:
//!
//! ```ignore
//! use fabrik_core::prelude::*;
//!
//! #[derive(Debug, Clone)]
//! struct Customer {
//! 	name: String,
//! }
//!
//! #[derive(Default)]
//! struct CustomerBuilder {
//! 	core: BuilderCore<Customer>,
//! }
//!
//! impl CustomerBuilder {
//! 	fn with_name(&mut self, name: &str) -> &mut Self {
//! 		self.core.set_value("name", name.to_string()).expect("valid key");
//! 		self
//! 	}
//! }
//!
//! impl Builder for CustomerBuilder {
//! 	type Subject = Customer;
//!
//! 	fn core(&self) -> &BuilderCore<Customer> {
//! 		&self.core
//! 	}
//!
//! 	fn core_mut(&mut self) -> &mut BuilderCore<Customer> {
//! 		&mut self.core
//! 	}
//!
//! 	fn construct() -> Option<Self> {
//! 		Some(Self::default())
//! 	}
//!
//! 	fn assemble(&mut self, seed: u64) -> BuilderResult<Customer> {
//! 		Ok(Customer {
//! 			name: self.core.property("name", || format!("customer {seed}"))?,
//! 		})
//! 	}
//! }
//!
//! let mut builder = CustomerBuilder::default();
//! let customer = builder.with_name("Ada").create(0)?;
//! assert_eq!(customer.name, "Ada");
//! ```
//!
//! # Architecture
//!
//! - [`Builder`] / [`BuilderCore`] - the core capability and its state
//! - [`ValueBuilder`] - leaf entry wrapping a fixed value
//! - [`CollectionBuilder`] - ordered sequences of item builders
//! - [`FactoryConvention`] / [`BuilderFactory`] - pluggable, tree-shared
//!   builder instantiation
//! - [`PropertyKey`] - validated, stable property references
//!
//! The engine performs no I/O and generates no data itself: callers supply
//! values (or draw them from an external faker) and an optional external
//! persistence collaborator may act on the
//! [`persist_requested`](Builder::persist_requested) intent flag after
//! `create`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod builder;
pub mod collection;
pub mod convention;
pub mod error;
pub mod key;
pub mod prelude;
pub mod value;

pub use builder::{AnyBuilder, Builder, BuilderCore, SlotRef};
pub use collection::CollectionBuilder;
pub use convention::{BuilderFactory, BuilderRequest, DefaultFactory, FactoryConvention};
pub use error::{BuilderError, BuilderResult};
pub use key::PropertyKey;
pub use value::ValueBuilder;
