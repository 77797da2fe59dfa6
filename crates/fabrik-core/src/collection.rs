//! Builders for ordered collections of subjects.

use std::sync::Arc;

use crate::builder::{Builder, BuilderCore};
use crate::convention::FactoryConvention;
use crate::error::BuilderResult;

/// A builder whose subject is an ordered sequence of `B`'s subjects.
///
/// Item builders are kept in registration order, which is also the output
/// order. Each item is created with its position as the seed, so a
/// seed-aware [`Builder::assemble`] can differentiate items added in one
/// batch. A collection builder is itself a [`Builder`], so it can sit in a
/// property registry and supports the full builder surface (customizations
/// apply to the assembled `Vec`).
pub struct CollectionBuilder<B: Builder> {
	core: BuilderCore<Vec<B::Subject>>,
	items: Vec<B>,
	explicitly_empty: bool,
}

impl<B: Builder> CollectionBuilder<B> {
	/// Creates a collection builder with a fresh factory convention.
	pub fn new() -> Self {
		Self::with_convention(Arc::new(FactoryConvention::new()))
	}

	/// Creates a collection builder sharing an existing convention, used
	/// when the collection belongs to a parent builder's tree.
	pub fn with_convention(convention: Arc<FactoryConvention>) -> Self {
		Self {
			core: BuilderCore::with_convention(convention),
			items: Vec::new(),
			explicitly_empty: false,
		}
	}

	/// Explicitly states that this collection should remain empty.
	///
	/// Clears any previously registered item builders; assembly checks the
	/// flag first, so items added afterwards stay ignored until the
	/// collection is reconfigured.
	pub fn none(&mut self) -> &mut Self {
		self.items.clear();
		self.explicitly_empty = true;
		self
	}

	/// Appends one item builder resolved through the shared convention and
	/// returns it for configuration.
	pub fn add_one(&mut self) -> BuilderResult<&mut B> {
		let builder = self.core.build_using::<B>()?;
		self.items.push(builder);
		let end = self.items.len() - 1;
		Ok(&mut self.items[end])
	}

	/// Appends one item builder configured by `configure`.
	pub fn add_one_with(&mut self, configure: impl FnMut(&mut B)) -> BuilderResult<&mut Self> {
		self.add_many_with(1, configure)
	}

	/// Appends an item builder bound to the given instance.
	pub fn add_instance(&mut self, item: B::Subject) -> BuilderResult<&mut Self>
	where
		B::Subject: Clone,
	{
		let mut builder = self.core.build_using::<B>()?;
		builder.with_instance(item);
		self.items.push(builder);
		Ok(self)
	}

	/// Appends one instance-bound item builder per item, preserving order.
	pub fn add_instances(
		&mut self,
		items: impl IntoIterator<Item = B::Subject>,
	) -> BuilderResult<&mut Self>
	where
		B::Subject: Clone,
	{
		for item in items {
			self.add_instance(item)?;
		}
		Ok(self)
	}

	/// Appends `count` independent item builders.
	pub fn add_many(&mut self, count: usize) -> BuilderResult<&mut Self> {
		self.add_many_with(count, |_| {})
	}

	/// Appends `count` independent item builders, applying `configure` to
	/// each.
	///
	/// Every slot gets its own builder, so configuring one item never
	/// bleeds into another; within the batch, items differ only by the
	/// positional seed their builder is created with.
	pub fn add_many_with(
		&mut self,
		count: usize,
		mut configure: impl FnMut(&mut B),
	) -> BuilderResult<&mut Self> {
		for _ in 0..count {
			let mut builder = self.core.build_using::<B>()?;
			configure(&mut builder);
			self.items.push(builder);
		}
		Ok(self)
	}

	/// The registered item builders, in registration order.
	pub fn builders(&self) -> &[B] {
		&self.items
	}

	/// Mutable access to the registered item builders.
	pub fn builders_mut(&mut self) -> &mut [B] {
		&mut self.items
	}

	/// Number of registered item builders.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` when no item builders are registered.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns `true` when the collection was explicitly set to be empty.
	pub fn is_explicitly_empty(&self) -> bool {
		self.explicitly_empty
	}

	/// Lazily creates every registered item, in registration order.
	///
	/// Item `i` is created with seed `i`. Calling `create_all` again
	/// restarts the walk from scratch.
	pub fn create_all(&mut self) -> impl Iterator<Item = BuilderResult<B::Subject>> + '_ {
		self.create_all_with(|_| {}, |_| {})
	}

	/// Lazily creates every registered item, applying `setup` to each item
	/// builder before its create and `customize` to each created item.
	pub fn create_all_with<'a, F, G>(
		&'a mut self,
		mut setup: F,
		mut customize: G,
	) -> impl Iterator<Item = BuilderResult<B::Subject>> + 'a
	where
		F: FnMut(&mut B) + 'a,
		G: FnMut(&mut B::Subject) + 'a,
	{
		let items = &mut self.items;
		let mut index = 0_usize;
		std::iter::from_fn(move || {
			let builder = items.get_mut(index)?;
			let seed = index as u64;
			index += 1;
			setup(builder);
			let result = builder.create(seed).map(|mut subject| {
				customize(&mut subject);
				subject
			});
			Some(result)
		})
	}
}

impl<B: Builder> Builder for CollectionBuilder<B> {
	type Subject = Vec<B::Subject>;

	fn core(&self) -> &BuilderCore<Vec<B::Subject>> {
		&self.core
	}

	fn core_mut(&mut self) -> &mut BuilderCore<Vec<B::Subject>> {
		&mut self.core
	}

	fn construct() -> Option<Self> {
		Some(Self::new())
	}

	fn assemble(&mut self, _seed: u64) -> BuilderResult<Vec<B::Subject>> {
		if self.explicitly_empty {
			return Ok(Vec::new());
		}
		self.create_all().collect()
	}
}

impl<B: Builder> Default for CollectionBuilder<B> {
	fn default() -> Self {
		Self::new()
	}
}
