//! The leaf builder wrapping a fixed value.

use std::any::Any;
use std::sync::Arc;

use crate::builder::AnyBuilder;
use crate::convention::FactoryConvention;
use crate::error::{BuilderError, BuilderResult};

/// A builder that always produces the value it wraps, ignoring the seed.
///
/// Exists so literals can sit in a property registry alongside nested and
/// collection builders under the one [`AnyBuilder`] capability. It has no
/// registry, no setups, and no factory capability of its own.
#[derive(Debug, Clone)]
pub struct ValueBuilder<T> {
	value: T,
}

impl<T: Clone + 'static> ValueBuilder<T> {
	/// Wraps `value`.
	pub fn new(value: T) -> Self {
		Self { value }
	}

	/// Borrows the wrapped value.
	pub fn value(&self) -> &T {
		&self.value
	}
}

impl<T: Clone + 'static> AnyBuilder for ValueBuilder<T> {
	fn create_erased(&mut self, _seed: u64) -> BuilderResult<Box<dyn Any>> {
		Ok(Box::new(self.value.clone()))
	}

	fn factory_source(&self) -> BuilderResult<Arc<FactoryConvention>> {
		Err(BuilderError::NotSupported(
			"a value builder wraps a fixed value and cannot act as a factory source".to_string(),
		))
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
