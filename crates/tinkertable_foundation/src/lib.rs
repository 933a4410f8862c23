//! Scalar values, severities, and error types for Tinkertable.
//!
//! This crate provides:
//! - [`Value`] - The scalar value type exposed through the console
//! - [`ValueKind`] - The three supported scalar kinds and their coercion rules
//! - [`Severity`] - Severity of a message on the result channel
//! - [`Error`] - Kind-based error type for registry and command failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod severity;
pub mod value;

pub use error::{Error, ErrorKind};
pub use severity::Severity;
pub use value::{Value, ValueKind};

/// Result type alias using the Tinkertable [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
