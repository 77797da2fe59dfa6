//! The builder capability.
//!
//! A builder is a composable recipe that produces one instance of a
//! subject type via [`Builder::create`]. Concrete builders embed a
//! [`BuilderCore`] holding their property-override registry and deferred
//! queues, and implement [`Builder::assemble`] to turn registry state into
//! a subject; creation, customization, instance overrides, and factory
//! resolution are provided here.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Default)]
//! struct CustomerBuilder {
//! 	core: BuilderCore<Customer>,
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
//! ```

mod erased;
mod state;

pub use erased::AnyBuilder;
pub use state::{BuilderCore, SlotRef};

use std::any::Any;
use std::sync::Arc;

use crate::convention::FactoryConvention;
use crate::error::BuilderResult;

/// A composable recipe producing instances of [`Builder::Subject`].
///
/// The provided methods fall into the capability groups of the engine:
/// building (`create`, `create_many`), customization (`customize`,
/// `with_instance`, `setup`), factory awareness (`build_using`,
/// `factory_convention`), and the persistence intent marker (`persisted`,
/// `persist_requested`). Registry access lives on [`BuilderCore`], reached
/// through [`Builder::core_mut`] from inside the concrete builder.
pub trait Builder: Sized + 'static {
	/// The type this builder produces.
	type Subject: 'static;

	/// Borrows the builder's state.
	fn core(&self) -> &BuilderCore<Self::Subject>;

	/// Mutably borrows the builder's state.
	fn core_mut(&mut self) -> &mut BuilderCore<Self::Subject>;

	/// Assembles the subject from the registry.
	///
	/// Implementations read overrides through
	/// [`BuilderCore::property`]/[`BuilderCore::collection`], falling back
	/// to domain defaults for unset keys, and may use `seed` to vary
	/// output deterministically across [`Builder::create_many`].
	fn assemble(&mut self, seed: u64) -> BuilderResult<Self::Subject>;

	/// No-argument construction hook used by the default factory strategy.
	///
	/// Builders that can be constructed without collaborators return a
	/// fresh instance here, typically `Some(Self::default())`. Builders
	/// that cannot leave the default (`None`) and are instantiated through
	/// a custom [`BuilderFactory`](crate::BuilderFactory) instead.
	fn construct() -> Option<Self> {
		None
	}

	/// Creates one subject.
	///
	/// When an override instance is set via [`Builder::with_instance`],
	/// the subject is produced from the override and the build step is
	/// skipped entirely; otherwise every queued setup runs first, in
	/// registration order, each free to mutate this builder's state before
	/// the next one reads it, and the subject is then assembled. In both
	/// cases every queued customization runs against the subject
	/// afterwards, in registration order, each seeing the effects of the
	/// previous one.
	///
	/// Safe to invoke repeatedly: absent external side effects in setups
	/// and customizations, repeated calls with the same seed and no
	/// override produce independent, equivalent instances.
	fn create(&mut self, seed: u64) -> BuilderResult<Self::Subject> {
		tracing::trace!(builder = std::any::type_name::<Self>(), seed, "creating subject");
		let mut subject = match self.core().instance.as_ref() {
			Some(instance) => instance(),
			None => {
				let mut setups = std::mem::take(&mut self.core_mut().setups);
				for setup in setups.iter_mut() {
					setup(&mut *self);
				}
				let added = std::mem::replace(&mut self.core_mut().setups, setups);
				self.core_mut().setups.extend(added);
				self.assemble(seed)?
			}
		};
		let mut customizations = std::mem::take(&mut self.core_mut().customizations);
		for customization in customizations.iter_mut() {
			customization(&mut subject);
		}
		let added = std::mem::replace(&mut self.core_mut().customizations, customizations);
		self.core_mut().customizations.extend(added);
		Ok(subject)
	}

	/// Creates `count` subjects with seeds `0..count`, in that order.
	///
	/// Fails fast on the first error; subjects produced by earlier calls
	/// are never touched by a later failure.
	fn create_many(&mut self, count: usize) -> BuilderResult<Vec<Self::Subject>> {
		(0..count).map(|seed| self.create(seed as u64)).collect()
	}

	/// Appends a post-construction mutation of the built subject.
	///
	/// Customizations run after assembly (or after the override instance
	/// is produced), in registration order.
	fn customize(&mut self, action: impl FnMut(&mut Self::Subject) + 'static) -> &mut Self {
		self.core_mut().customizations.push(Box::new(action));
		self
	}

	/// Overrides the subject with a fixed instance.
	///
	/// Setups and assembly are skipped for an overridden builder;
	/// customizations still run against the override.
	fn with_instance(&mut self, instance: Self::Subject) -> &mut Self
	where
		Self::Subject: Clone,
	{
		self.core_mut().instance = Some(Box::new(move || instance.clone()));
		self
	}

	/// Enqueues a deferred action applied to this builder itself at
	/// [`Builder::create`] time, before assembly.
	fn setup(&mut self, action: impl FnMut(&mut Self) + 'static) -> &mut Self {
		let mut action = action;
		self.core_mut().setups.push(Box::new(move |any: &mut dyn Any| {
			if let Some(builder) = any.downcast_mut::<Self>() {
				action(builder);
			}
		}));
		self
	}

	/// Sets the persistence intent flag.
	///
	/// The engine stores and exposes the flag; persisting the created
	/// subject is the job of an external collaborator that reads it.
	fn persisted(&mut self, persist: bool) -> &mut Self {
		self.core_mut().persist = persist;
		self
	}

	/// Returns the persistence intent flag. Defaults to `false`.
	fn persist_requested(&self) -> bool {
		self.core().persist
	}

	/// Instantiates a builder of type `B` through this builder's
	/// convention, propagating the convention reference onto it so the
	/// whole tree shares one creation strategy.
	fn build_using<B: Builder>(&self) -> BuilderResult<B> {
		self.core().build_using()
	}

	/// The factory convention shared across this builder's build tree.
	fn factory_convention(&self) -> Arc<FactoryConvention> {
		Arc::clone(&self.core().convention)
	}

	/// Replaces this builder's convention reference.
	///
	/// Builders already resolved from the previous convention are
	/// unaffected; only builders resolved through this builder afterward
	/// pick up the new reference.
	fn set_factory_convention(&mut self, convention: Arc<FactoryConvention>) {
		self.core_mut().convention = convention;
	}
}
