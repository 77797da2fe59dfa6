//! Pluggable builder-construction strategies.
//!
//! A [`BuilderFactory`] decides how to instantiate a builder of a requested
//! type. The engine hands it a type-erased [`BuilderRequest`]; custom
//! factories match on the requested type to construct builders that need
//! collaborators, and can fall back to the request's own no-argument
//! construction hook for everything else.

use std::any::{Any, TypeId};

use crate::builder::Builder;
use crate::error::{BuilderError, BuilderResult};

/// Type-erased description of a builder-construction request.
///
/// Carries the requested builder's type identity together with a
/// monomorphized hook for the type's own no-argument construction
/// ([`Builder::construct`]). This replaces runtime type inspection: the
/// construction closure is captured at the generic call site, so a factory
/// never has to reflect over the requested type.
pub struct BuilderRequest {
	type_id: TypeId,
	type_name: &'static str,
	construct: fn() -> Option<Box<dyn Any>>,
}

impl BuilderRequest {
	/// Builds a request for the builder type `B`.
	pub fn of<B: Builder>() -> Self {
		Self {
			type_id: TypeId::of::<B>(),
			type_name: std::any::type_name::<B>(),
			construct: erased_construct::<B>,
		}
	}

	/// Returns `true` if this request asks for the builder type `B`.
	pub fn is<B: Builder>(&self) -> bool {
		self.type_id == TypeId::of::<B>()
	}

	/// Type id of the requested builder.
	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	/// Human-readable name of the requested builder type.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Attempts the requested type's own no-argument construction hook.
	///
	/// Returns `None` when the builder type does not opt into no-argument
	/// construction (its [`Builder::construct`] yields nothing).
	pub fn default_construct(&self) -> Option<Box<dyn Any>> {
		(self.construct)()
	}
}

fn erased_construct<B: Builder>() -> Option<Box<dyn Any>> {
	B::construct().map(|builder| Box::new(builder) as Box<dyn Any>)
}

/// Strategy for instantiating builders by requested type.
///
/// Implement this to construct builders whose creation requires
/// collaborators the engine knows nothing about, then install the
/// implementation on a build tree with
/// [`FactoryConvention::use_factory`](super::FactoryConvention::use_factory).
pub trait BuilderFactory: Send + Sync {
	/// Instantiates a builder for `request`.
	///
	/// The returned box must contain a value of exactly the requested type.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Configuration`] when the factory has no
	/// construction path for the requested type.
	fn instantiate(&self, request: &BuilderRequest) -> BuilderResult<Box<dyn Any>>;
}

/// The default strategy: no-argument construction only.
///
/// Resolves a request through the builder type's own
/// [`Builder::construct`] hook and fails with guidance when the type does
/// not provide one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl BuilderFactory for DefaultFactory {
	fn instantiate(&self, request: &BuilderRequest) -> BuilderResult<Box<dyn Any>> {
		request
			.default_construct()
			.ok_or_else(|| BuilderError::Configuration {
				type_name: request.type_name(),
				reason: "the builder type does not provide no-argument construction".to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::builder::BuilderCore;
	use crate::error::BuilderResult;
	use rstest::rstest;

	#[derive(Default)]
	struct PlainBuilder {
		core: BuilderCore<u32>,
	}

	impl Builder for PlainBuilder {
		type Subject = u32;

		fn core(&self) -> &BuilderCore<u32> {
			&self.core
		}

		fn core_mut(&mut self) -> &mut BuilderCore<u32> {
			&mut self.core
		}

		fn construct() -> Option<Self> {
			Some(Self::default())
		}

		fn assemble(&mut self, seed: u64) -> BuilderResult<u32> {
			Ok(seed as u32)
		}
	}

	struct OpaqueBuilder {
		core: BuilderCore<u32>,
	}

	impl Builder for OpaqueBuilder {
		type Subject = u32;

		fn core(&self) -> &BuilderCore<u32> {
			&self.core
		}

		fn core_mut(&mut self) -> &mut BuilderCore<u32> {
			&mut self.core
		}

		fn assemble(&mut self, _seed: u64) -> BuilderResult<u32> {
			Ok(0)
		}
	}

	#[rstest]
	fn test_request_identifies_builder_type() {
		let request = BuilderRequest::of::<PlainBuilder>();
		assert!(request.is::<PlainBuilder>());
		assert!(!request.is::<OpaqueBuilder>());
		assert!(request.type_name().contains("PlainBuilder"));
	}

	#[rstest]
	fn test_default_factory_uses_construct_hook() {
		let boxed = DefaultFactory
			.instantiate(&BuilderRequest::of::<PlainBuilder>())
			.unwrap();
		assert!(boxed.downcast::<PlainBuilder>().is_ok());
	}

	#[rstest]
	fn test_default_factory_rejects_types_without_construct() {
		let error = DefaultFactory
			.instantiate(&BuilderRequest::of::<OpaqueBuilder>())
			.unwrap_err();
		assert!(matches!(error, BuilderError::Configuration { .. }));
		assert!(error.to_string().contains("OpaqueBuilder"));
	}
}
