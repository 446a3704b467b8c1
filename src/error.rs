//! Error types for the validation pipeline.
//!
//! Two distinct classes exist and must never be conflated:
//!
//! - [`ValidationError`] is the expected, recoverable outcome of bad user
//!   input. Hosts surface its message to the caller as the reason their
//!   input was rejected.
//! - [`ConfigError`] signals a programming mistake in the calling code
//!   (a [`Target::Custom`](crate::target::Target::Custom) descriptor with
//!   no handler attached). It indicates a defect requiring a code fix,
//!   never a retry, and is deliberately not representable as a
//!   `ValidationError`.
//!
//! [`ValidateError`] is the pipeline's return error and wraps exactly one
//! of the two, so hosts can assert on the class directly.

use miette::Diagnostic;
use thiserror::Error;

/// A recoverable validation failure caused by the input itself.
///
/// Carries a human-readable message identifying the field and the
/// expectation violated. Produced by rules and by type coercion.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    /// A rule rejected the resolved input.
    #[error("{message}")]
    #[diagnostic(code(paramcast::rule))]
    Rule {
        /// Field the rule was evaluated against.
        name: String,
        /// The rule's own rejection message.
        message: String,
    },

    /// The raw input failed to parse as the destination type.
    #[error("Invalid `{name}` parameter, `{name}` must be {expected}")]
    #[diagnostic(
        code(paramcast::type_mismatch),
        help("The value supplied for this field does not parse as the expected type.")
    )]
    TypeMismatch {
        /// Field whose input failed to parse.
        name: String,
        /// Phrase describing the expected type, e.g. "an int64".
        expected: &'static str,
    },
}

impl ValidationError {
    /// Creates a rule-failure error for the given field.
    pub fn rule(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rule {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a type-mismatch error for the given field.
    pub fn type_mismatch(name: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
        }
    }

    /// The field this error is about.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Rule { name, .. } | Self::TypeMismatch { name, .. } => name,
        }
    }
}

/// A misconfigured descriptor list. Programmer error, not bad input.
///
/// Correct production code never produces this; tests assert on it
/// directly instead of catching an unwind.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    /// A `Target::Custom` descriptor has no handler to coerce with.
    #[error("no coercion available for `{name}`: custom targets require a handler")]
    #[diagnostic(
        code(paramcast::config::missing_handler),
        help("Attach a handler with Param::with_handler, or use a built-in Target variant.")
    )]
    MissingHandler {
        /// Field whose descriptor is misconfigured.
        name: String,
    },
}

/// Error returned by [`validate`](crate::validate::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidateError {
    /// The input was rejected; surface the message to the caller.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invalid(#[from] ValidationError),

    /// The descriptor list is misconfigured; fix the calling code.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

impl ValidateError {
    /// The inner [`ValidationError`], if this is an input rejection.
    #[must_use]
    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Config(_) => None,
        }
    }

    /// Whether this is a configuration (programmer) error.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
