//! Error types for the builder engine.
//!
//! This module defines the error types used throughout the fabrik-core crate.

use thiserror::Error;

/// Errors that can occur while configuring or running builders.
///
/// All errors are fail-fast: the engine never retries, never recovers
/// internally, and never substitutes a default for a failed operation.
#[derive(Debug, Error)]
pub enum BuilderError {
	/// No usable construction path exists for a requested builder type.
	#[error(
		"cannot construct builder `{type_name}`: {reason}. Implement `Builder::construct` for \
		 the builder type, or install a custom factory with `FactoryConvention::use_factory` \
		 on the parent builder's convention"
	)]
	Configuration {
		/// Name of the builder type that could not be constructed.
		type_name: &'static str,
		/// Why construction failed.
		reason: String,
	},

	/// A property reference did not resolve to a direct property access.
	#[error("invalid property reference `{reference}`: {reason}")]
	Usage {
		/// The offending property reference as written at the call site.
		reference: String,
		/// Why the reference was rejected.
		reason: String,
	},

	/// An operation requiring factory or registry capability was invoked on
	/// a builder that has neither.
	#[error("operation not supported: {0}")]
	NotSupported(String),

	/// A registry entry produced a value of a different type than the one
	/// requested at the read site.
	#[error("property `{key}` does not produce a value of type `{expected}`")]
	PropertyType {
		/// Key of the registry entry that was read.
		key: String,
		/// Name of the type the caller asked for.
		expected: &'static str,
	},
}

/// Result type alias for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
