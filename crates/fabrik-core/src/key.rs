//! Stable property references.
//!
//! Every call site names the property it touches explicitly, and the
//! boundary rejects anything that is not a direct property reference
//! before it can reach a registry.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{BuilderError, BuilderResult};

/// A validated, stable identifier of a subject property.
///
/// Keys are plain identifiers: a leading ASCII letter or underscore
/// followed by ASCII letters, digits, or underscores. Path expressions
/// (`customer.name`), call expressions (`name()`), and other computed
/// references are rejected with [`BuilderError::Usage`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyKey(String);

impl PropertyKey {
	/// Parses a property reference into a key.
	///
	/// # Errors
	///
	/// Returns [`BuilderError::Usage`] when `reference` does not resolve to
	/// a direct property access.
	pub fn parse(reference: impl AsRef<str>) -> BuilderResult<Self> {
		let reference = reference.as_ref();
		let mut chars = reference.chars();
		match chars.next() {
			None => {
				return Err(usage(reference, "property reference is empty"));
			}
			Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
			Some(first) => {
				return Err(usage(
					reference,
					format!("must start with a letter or underscore, found `{first}`"),
				));
			}
		}
		for c in chars {
			if c.is_ascii_alphanumeric() || c == '_' {
				continue;
			}
			let reason = match c {
				'.' => "path expressions do not resolve to a direct property".to_string(),
				'(' | ')' => "call expressions do not resolve to a direct property".to_string(),
				c if c.is_whitespace() => "whitespace is not allowed in a property reference".to_string(),
				c => format!("unexpected character `{c}`"),
			};
			return Err(usage(reference, reason));
		}
		Ok(Self(reference.to_string()))
	}

	/// The key as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

fn usage(reference: &str, reason: impl Into<String>) -> BuilderError {
	BuilderError::Usage {
		reference: reference.to_string(),
		reason: reason.into(),
	}
}

impl fmt::Display for PropertyKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for PropertyKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl FromStr for PropertyKey {
	type Err = BuilderError;

	fn from_str(s: &str) -> BuilderResult<Self> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("name")]
	#[case("signed_up")]
	#[case("_internal")]
	#[case("line2")]
	fn test_direct_references_are_accepted(#[case] reference: &str) {
		let key = PropertyKey::parse(reference).unwrap();
		assert_eq!(key.as_str(), reference);
	}

	#[rstest]
	#[case("", "empty")]
	#[case("customer.name", "path expressions")]
	#[case("name()", "call expressions")]
	#[case("first name", "whitespace")]
	#[case("2fast", "letter or underscore")]
	#[case("name!", "unexpected character")]
	fn test_computed_references_are_rejected(#[case] reference: &str, #[case] fragment: &str) {
		let error = PropertyKey::parse(reference).unwrap_err();
		assert!(matches!(error, BuilderError::Usage { .. }));
		assert!(
			error.to_string().contains(fragment),
			"expected `{error}` to mention `{fragment}`"
		);
	}

	#[rstest]
	fn test_key_borrows_as_str() {
		let key = PropertyKey::parse("name").unwrap();
		let borrowed: &str = key.borrow();
		assert_eq!(borrowed, "name");
	}

	#[rstest]
	fn test_from_str_round_trip() {
		let key: PropertyKey = "placed_at".parse().unwrap();
		assert_eq!(key.to_string(), "placed_at");
	}
}
