//! Scenario tests for nested builder composition.

#[path = "helpers/domain.rs"]
mod domain;

use std::sync::Arc;

use chrono::{Duration, Utc};
use domain::*;
use fabrik_core::prelude::*;
use rstest::rstest;

#[rstest]
fn test_nested_configuration_is_applied_on_the_nested_builder() {
	let mut builder = OrderBuilder::default();
	builder.with_customer(|customer| {
		customer.with_name("I am child");
	});

	let order = builder.create(0).unwrap();

	assert_eq!(order.customer.name, "I am child");
}

#[rstest]
fn test_nested_configuration_merges_with_nested_defaults() {
	let mut builder = OrderBuilder::default();
	builder.with_customer(|customer| {
		customer.with_signed_up(Utc::now());
	});

	let order = builder.create(0).unwrap();

	assert_eq!(order.customer.name, "new customer");
}

#[rstest]
fn test_nested_instance_override_wins_over_configuration() {
	let someday = Utc::now() - Duration::days(1);
	let mut existing_builder = CustomerBuilder::default();
	existing_builder.with_name("I am from instance").with_signed_up(someday);
	let existing = existing_builder.create(0).unwrap();

	let mut builder = OrderBuilder::default();
	builder.with_customer(|customer| {
		customer.with_name("concurrently configured");
		customer.with_instance(existing.clone());
	});

	let order = builder.create(0).unwrap();

	assert_eq!(order.customer.name, "I am from instance");
	assert_eq!(order.customer.signed_up, someday);
}

#[rstest]
fn test_nested_builders_share_the_root_convention() {
	let mut builder = OrderBuilder::default();
	builder.with_customer(|_| {});
	let root_convention = builder.factory_convention();

	let slot = builder
		.core_mut()
		.property_builder::<CustomerBuilder>("customer", CustomerBuilder::default)
		.unwrap();

	assert!(slot.is_stored());
	assert!(Arc::ptr_eq(&root_convention, &slot.factory_convention()));
}

#[rstest]
fn test_nested_builder_effects_survive_repeated_creates() {
	let mut builder = OrderBuilder::default();
	builder.with_customer(|customer| {
		customer.with_name("stable");
	});

	let first = builder.create(0).unwrap();
	let second = builder.create(0).unwrap();

	assert_eq!(first.customer, second.customer);
	assert_eq!(second.customer.name, "stable");
}
