//! The tree-shared builder-creation convention.
//!
//! Every build tree owns exactly one [`FactoryConvention`], created on its
//! root builder's construction and shared by reference (`Arc`) with every
//! builder resolved through [`Builder::build_using`](crate::Builder::build_using).
//! The convention holds the tree's one pluggable [`BuilderFactory`]
//! strategy; replacing it affects only builders resolved afterward through
//! the same convention reference, never builders already instantiated.

mod factory;

pub use factory::{BuilderFactory, BuilderRequest, DefaultFactory};

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::builder::Builder;
use crate::error::{BuilderError, BuilderResult};

/// Holds the single pluggable builder-creation strategy of a build tree.
pub struct FactoryConvention {
	factory: RwLock<Arc<dyn BuilderFactory>>,
}

impl FactoryConvention {
	/// Creates a convention with the [`DefaultFactory`] strategy.
	pub fn new() -> Self {
		Self::with_factory(Arc::new(DefaultFactory))
	}

	/// Creates a convention with a custom factory strategy.
	pub fn with_factory(factory: Arc<dyn BuilderFactory>) -> Self {
		Self {
			factory: RwLock::new(factory),
		}
	}

	/// Replaces the active factory strategy.
	///
	/// Takes effect for builders resolved through this convention from now
	/// on; builders already instantiated are unaffected.
	pub fn use_factory(&self, factory: Arc<dyn BuilderFactory>) {
		tracing::debug!("replacing active builder factory");
		*self.factory.write() = factory;
	}

	/// Instantiates a builder of type `B` using the active factory.
	///
	/// The returned builder still carries its own fresh convention;
	/// propagating a shared convention onto it is the caller's job. The
	/// normal entry point is [`Builder::build_using`](crate::Builder::build_using),
	/// which does both.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Configuration`] when the active factory has
	/// no construction path for `B`, or produced a value of a different
	/// type.
	pub fn instantiate<B: Builder>(&self) -> BuilderResult<B> {
		let factory = Arc::clone(&*self.factory.read());
		let request = BuilderRequest::of::<B>();
		tracing::trace!(builder = request.type_name(), "resolving builder through convention");
		let boxed = factory.instantiate(&request)?;
		match boxed.downcast::<B>() {
			Ok(builder) => Ok(*builder),
			Err(_) => Err(BuilderError::Configuration {
				type_name: request.type_name(),
				reason: "the active factory produced a builder of a different type".to_string(),
			}),
		}
	}
}

impl Default for FactoryConvention {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for FactoryConvention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FactoryConvention").finish_non_exhaustive()
	}
}
