//! Error types for Tinkertable.
//!
//! Uses `thiserror` for ergonomic error definition. User-input failures are
//! converted to command results at the dispatch layer; `Error` values that
//! escape to the host signal registration or I/O problems.

use thiserror::Error;

use crate::value::ValueKind;

/// The main error type for Tinkertable operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a "line is not a command" error (missing `/` sigil).
    #[must_use]
    pub fn not_a_command() -> Self {
        Self::new(ErrorKind::NotACommand)
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(keyword: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(keyword.into()))
    }

    /// Creates a missing-arguments error.
    #[must_use]
    pub fn missing_arguments(command: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::MissingArguments {
            command: command.into(),
            expected,
            actual,
        })
    }

    /// Creates an unknown-variable error.
    #[must_use]
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVariable(name.into()))
    }

    /// Creates an invalid-value (coercion failure) error.
    #[must_use]
    pub fn invalid_value(value: impl Into<String>, expected: ValueKind) -> Self {
        Self::new(ErrorKind::InvalidValue {
            value: value.into(),
            expected,
        })
    }

    /// Creates a not-mutable error.
    #[must_use]
    pub fn not_mutable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotMutable(name.into()))
    }

    /// Creates a duplicate-variable registration error.
    #[must_use]
    pub fn duplicate_variable(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateVariable(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input did not start with the `/` command sigil.
    #[error("valid command should start with '/'")]
    NotACommand,

    /// Command keyword was not recognized.
    #[error("invalid command: '{0}'")]
    UnknownCommand(String),

    /// Recognized keyword with too few positional arguments.
    #[error("command '{command}' has not enough arguments (expected {expected}, got {actual})")]
    MissingArguments {
        /// The command keyword, including the sigil.
        command: String,
        /// Number of arguments the command requires.
        expected: usize,
        /// Number of arguments actually supplied.
        actual: usize,
    },

    /// Variable name not found in the registry, or its instance is gone.
    #[error("variable '{0}' not found")]
    UnknownVariable(String),

    /// Raw value failed type coercion for the target field.
    #[error("invalid value '{value}' (expected {expected})")]
    InvalidValue {
        /// The raw value that failed to coerce.
        value: String,
        /// The kind the target field expects.
        expected: ValueKind,
    },

    /// Attempt to set or reset a read-only field.
    #[error("variable '{0}' is read-only")]
    NotMutable(String),

    /// A second field was registered under an already-taken name.
    #[error("duplicate variable name '{0}'")]
    DuplicateVariable(String),

    /// Terminal or line-editor failure.
    #[error("io error: {0}")]
    Io(String),
}
