//! Type-erased registry capability.
//!
//! A property registry is heterogeneous: one key may hold a wrapped
//! literal, another a nested builder, another a collection builder.
//! [`AnyBuilder`] is the one object-safe capability they all share, so a
//! registry can store them side by side and downcast back to the concrete
//! builder type when a caller asks for it.

use std::any::Any;
use std::sync::Arc;

use crate::convention::FactoryConvention;
use crate::error::BuilderResult;

use super::Builder;

/// Object-safe create capability for property-registry entries.
pub trait AnyBuilder: Any {
	/// Produces the entry's value, boxed for heterogeneous storage.
	fn create_erased(&mut self, seed: u64) -> BuilderResult<Box<dyn Any>>;

	/// The factory convention this entry shares with builders created
	/// beneath it.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::NotSupported`](crate::BuilderError::NotSupported)
	/// for entries without factory capability, such as wrapped literals.
	fn factory_source(&self) -> BuilderResult<Arc<FactoryConvention>>;

	/// Borrows the entry for downcasting to its concrete type.
	fn as_any(&self) -> &dyn Any;

	/// Mutably borrows the entry for downcasting to its concrete type.
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<B: Builder> AnyBuilder for B {
	fn create_erased(&mut self, seed: u64) -> BuilderResult<Box<dyn Any>> {
		Ok(Box::new(self.create(seed)?))
	}

	fn factory_source(&self) -> BuilderResult<Arc<FactoryConvention>> {
		Ok(self.factory_convention())
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
