//! Example domain types and builders shared by the scenario tests.
//!
//! A small order-taking domain: an order references a customer and an
//! ordered list of order lines. The builders exercise every composition
//! feature of the engine: value overrides, nested builders, and
//! collection builders.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use fabrik_core::prelude::*;

/// Earliest representable timestamp, used as the domain's "unset" date.
pub fn min_date() -> DateTime<Utc> {
	DateTime::<Utc>::MIN_UTC
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
	pub name: String,
	pub signed_up: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
	pub sku: String,
	pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
	pub reference: String,
	pub placed_at: DateTime<Utc>,
	pub customer: Customer,
	pub lines: Vec<OrderLine>,
}

#[derive(Default)]
pub struct CustomerBuilder {
	core: BuilderCore<Customer>,
}

impl CustomerBuilder {
	pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.core.set_value("name", name.into()).expect("valid key");
		self
	}

	pub fn with_signed_up(&mut self, at: DateTime<Utc>) -> &mut Self {
		self.core.set_value("signed_up", at).expect("valid key");
		self
	}
}

impl Builder for CustomerBuilder {
	type Subject = Customer;

	fn core(&self) -> &BuilderCore<Customer> {
		&self.core
	}

	fn core_mut(&mut self) -> &mut BuilderCore<Customer> {
		&mut self.core
	}

	fn construct() -> Option<Self> {
		Some(Self::default())
	}

	fn assemble(&mut self, _seed: u64) -> BuilderResult<Customer> {
		Ok(Customer {
			name: self.core.property("name", || "new customer".to_string())?,
			signed_up: self.core.property("signed_up", min_date)?,
		})
	}
}

#[derive(Default)]
pub struct OrderLineBuilder {
	core: BuilderCore<OrderLine>,
}

impl OrderLineBuilder {
	pub fn with_sku(&mut self, sku: impl Into<String>) -> &mut Self {
		self.core.set_value("sku", sku.into()).expect("valid key");
		self
	}

	pub fn with_quantity(&mut self, quantity: u32) -> &mut Self {
		self.core.set_value("quantity", quantity).expect("valid key");
		self
	}
}

impl Builder for OrderLineBuilder {
	type Subject = OrderLine;

	fn core(&self) -> &BuilderCore<OrderLine> {
		&self.core
	}

	fn core_mut(&mut self) -> &mut BuilderCore<OrderLine> {
		&mut self.core
	}

	fn construct() -> Option<Self> {
		Some(Self::default())
	}

	fn assemble(&mut self, seed: u64) -> BuilderResult<OrderLine> {
		Ok(OrderLine {
			sku: self.core.property("sku", || format!("SKU-{seed:04}"))?,
			quantity: self.core.property("quantity", || 1)?,
		})
	}
}

#[derive(Default)]
pub struct OrderBuilder {
	core: BuilderCore<Order>,
}

impl OrderBuilder {
	pub fn with_reference(&mut self, reference: impl Into<String>) -> &mut Self {
		self.core.set_value("reference", reference.into()).expect("valid key");
		self
	}

	pub fn with_placed_at(&mut self, at: DateTime<Utc>) -> &mut Self {
		self.core.set_value("placed_at", at).expect("valid key");
		self
	}

	pub fn with_customer(&mut self, configure: impl FnOnce(&mut CustomerBuilder)) -> &mut Self {
		self.core
			.set_nested_with("customer", configure)
			.expect("valid key");
		self
	}

	pub fn with_lines(
		&mut self,
		configure: impl FnOnce(&mut CollectionBuilder<OrderLineBuilder>),
	) -> &mut Self {
		self.core.set_collection("lines", configure).expect("valid key");
		self
	}
}

impl Builder for OrderBuilder {
	type Subject = Order;

	fn core(&self) -> &BuilderCore<Order> {
		&self.core
	}

	fn core_mut(&mut self) -> &mut BuilderCore<Order> {
		&mut self.core
	}

	fn construct() -> Option<Self> {
		Some(Self::default())
	}

	fn assemble(&mut self, seed: u64) -> BuilderResult<Order> {
		let lines = self.core.collection::<OrderLineBuilder>("lines")?.create(0)?;
		Ok(Order {
			reference: self.core.property("reference", || format!("order-{seed}"))?,
			placed_at: self.core.property("placed_at", min_date)?,
			customer: self.core.property("customer", || Customer {
				name: "new customer".to_string(),
				signed_up: min_date(),
			})?,
			lines,
		})
	}
}
