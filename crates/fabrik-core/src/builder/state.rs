//! Per-builder state: the property-override registry and deferred queues.

use std::any::Any;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::collection::CollectionBuilder;
use crate::convention::FactoryConvention;
use crate::error::{BuilderError, BuilderResult};
use crate::key::PropertyKey;
use crate::value::ValueBuilder;

use super::{AnyBuilder, Builder};

pub(crate) type SetupFn = Box<dyn FnMut(&mut dyn Any)>;
pub(crate) type CustomizeFn<S> = Box<dyn FnMut(&mut S)>;
pub(crate) type InstanceFn<S> = Box<dyn Fn() -> S>;

/// State owned by every builder of subject `S`.
///
/// Concrete builders embed a `BuilderCore` and reach the registry
/// operations through it; the public builder surface lives on the
/// [`Builder`] trait. Registry entries are last-write-wins: setting a key
/// twice replaces, never merges, the prior entry.
pub struct BuilderCore<S: 'static> {
	pub(crate) registry: HashMap<PropertyKey, Box<dyn AnyBuilder>>,
	pub(crate) setups: Vec<SetupFn>,
	pub(crate) customizations: Vec<CustomizeFn<S>>,
	pub(crate) instance: Option<InstanceFn<S>>,
	pub(crate) convention: Arc<FactoryConvention>,
	pub(crate) persist: bool,
}

impl<S: 'static> std::fmt::Debug for BuilderCore<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BuilderCore")
			.field("registry_len", &self.registry.len())
			.field("setups_len", &self.setups.len())
			.field("customizations_len", &self.customizations.len())
			.field("has_instance", &self.instance.is_some())
			.field("persist", &self.persist)
			.finish()
	}
}

impl<S: 'static> BuilderCore<S> {
	/// Creates an empty core with a fresh factory convention.
	pub fn new() -> Self {
		Self::with_convention(Arc::new(FactoryConvention::new()))
	}

	/// Creates an empty core sharing an existing factory convention.
	pub fn with_convention(convention: Arc<FactoryConvention>) -> Self {
		Self {
			registry: HashMap::new(),
			setups: Vec::new(),
			customizations: Vec::new(),
			instance: None,
			convention,
			persist: false,
		}
	}

	/// Stores `value` at `key`, wrapped in a [`ValueBuilder`], replacing
	/// any existing entry.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Usage`] when `key` is not a direct property
	/// reference.
	pub fn set_value<T: Clone + 'static>(&mut self, key: &str, value: T) -> BuilderResult<&mut Self> {
		let key = PropertyKey::parse(key)?;
		self.registry.insert(key, Box::new(ValueBuilder::new(value)));
		Ok(self)
	}

	/// Resolves a new nested builder of type `B` through the shared
	/// convention and stores it at `key`.
	pub fn set_nested<B: Builder>(&mut self, key: &str) -> BuilderResult<&mut Self> {
		self.set_nested_with::<B>(key, |_| {})
	}

	/// Resolves a new nested builder of type `B`, applies `configure` to it
	/// exactly once, and stores it at `key`.
	///
	/// The configuration runs at call time, so its effects are visible
	/// before the nested builder is stored and at every later `create` of
	/// the outer builder.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Usage`] for an invalid key, or
	/// [`BuilderError::Configuration`] when the convention cannot
	/// instantiate `B`.
	pub fn set_nested_with<B: Builder>(
		&mut self,
		key: &str,
		configure: impl FnOnce(&mut B),
	) -> BuilderResult<&mut Self> {
		let key = PropertyKey::parse(key)?;
		let mut nested: B = self.build_using()?;
		configure(&mut nested);
		self.registry.insert(key, Box::new(nested));
		Ok(self)
	}

	/// Creates a fresh collection builder sharing this builder's
	/// convention, applies `configure` to it, and stores it at `key`.
	pub fn set_collection<B: Builder>(
		&mut self,
		key: &str,
		configure: impl FnOnce(&mut CollectionBuilder<B>),
	) -> BuilderResult<&mut Self> {
		let key = PropertyKey::parse(key)?;
		let mut collection = CollectionBuilder::with_convention(Arc::clone(&self.convention));
		configure(&mut collection);
		self.registry.insert(key, Box::new(collection));
		Ok(self)
	}

	/// Returns the collection builder registered at `key`.
	///
	/// When no entry exists at `key`, or the entry is not a collection of
	/// `B`, returns a fresh, detached collection builder sharing this
	/// builder's convention; reading a collection back never forces a
	/// registration.
	pub fn collection<B: Builder>(
		&mut self,
		key: &str,
	) -> BuilderResult<SlotRef<'_, CollectionBuilder<B>>> {
		let convention = Arc::clone(&self.convention);
		self.property_builder(key, || CollectionBuilder::with_convention(convention))
	}

	/// Returns `true` iff a registry entry exists at `key`.
	pub fn has_property(&self, key: &str) -> BuilderResult<bool> {
		let key = PropertyKey::parse(key)?;
		Ok(self.registry.contains_key(&key))
	}

	/// Returns the created value of the entry at `key`, or the default.
	///
	/// When an entry exists, its value is created (with seed 0) and the
	/// default producer is never invoked. When no entry exists, `default`
	/// is invoked exactly once and its result returned.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::PropertyType`] when the entry's created
	/// value is not a `T`, and [`BuilderError::Usage`] for an invalid key.
	pub fn property<T: 'static>(
		&mut self,
		key: &str,
		default: impl FnOnce() -> T,
	) -> BuilderResult<T> {
		let key = PropertyKey::parse(key)?;
		match self.registry.get_mut(&key) {
			Some(entry) => match entry.create_erased(0)?.downcast::<T>() {
				Ok(value) => Ok(*value),
				Err(_) => Err(BuilderError::PropertyType {
					key: key.to_string(),
					expected: std::any::type_name::<T>(),
				}),
			},
			None => Ok(default()),
		}
	}

	/// Returns the created value of the entry at `key`, or `default` as is.
	pub fn property_or<T: 'static>(&mut self, key: &str, default: T) -> BuilderResult<T> {
		self.property(key, || default)
	}

	/// Returns the builder stored at `key` itself, not its created value.
	///
	/// When no entry exists, or the entry is not a `B`, returns the
	/// detached builder produced by `or_use` instead; nothing is
	/// registered.
	pub fn property_builder<B: Builder>(
		&mut self,
		key: &str,
		or_use: impl FnOnce() -> B,
	) -> BuilderResult<SlotRef<'_, B>> {
		let key = PropertyKey::parse(key)?;
		let stored = self
			.registry
			.get(&key)
			.is_some_and(|entry| entry.as_any().is::<B>());
		if stored {
			if let Some(entry) = self.registry.get_mut(&key) {
				if let Some(builder) = entry.as_any_mut().downcast_mut::<B>() {
					return Ok(SlotRef::Stored(builder));
				}
			}
		}
		Ok(SlotRef::Detached(or_use()))
	}

	/// Instantiates a builder of type `B` through this builder's
	/// convention and propagates the convention reference onto it, so the
	/// whole tree shares one creation strategy.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Configuration`] when the convention cannot
	/// instantiate `B`.
	pub fn build_using<B: Builder>(&self) -> BuilderResult<B> {
		let mut builder: B = self.convention.instantiate()?;
		builder.core_mut().convention = Arc::clone(&self.convention);
		Ok(builder)
	}

	/// The factory convention shared across this builder's build tree.
	pub fn convention(&self) -> &Arc<FactoryConvention> {
		&self.convention
	}
}

impl<S: 'static> Default for BuilderCore<S> {
	fn default() -> Self {
		Self::new()
	}
}

/// Access to a registry slot: either the stored builder or a detached one
/// that was never registered.
///
/// Both variants dereference to the builder, so callers can configure or
/// create through a `SlotRef` without caring which case they got.
pub enum SlotRef<'a, B> {
	/// The builder registered at the requested key.
	Stored(&'a mut B),
	/// A fresh builder with no registry entry behind it.
	Detached(B),
}

impl<B> SlotRef<'_, B> {
	/// Returns `true` when the slot refers to a registered builder.
	pub fn is_stored(&self) -> bool {
		matches!(self, Self::Stored(_))
	}
}

impl<B> Deref for SlotRef<'_, B> {
	type Target = B;

	fn deref(&self) -> &B {
		match self {
			Self::Stored(builder) => builder,
			Self::Detached(builder) => builder,
		}
	}
}

impl<B> DerefMut for SlotRef<'_, B> {
	fn deref_mut(&mut self) -> &mut B {
		match self {
			Self::Stored(builder) => builder,
			Self::Detached(builder) => builder,
		}
	}
}
