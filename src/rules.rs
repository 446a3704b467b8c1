//! Stock validation rules.
//!
//! Each constructor returns a closure satisfying the
//! [`Rule`](crate::param::Rule) contract: it receives the field name and
//! the resolved input (raw input, or the default when the raw input is
//! empty) and rejects with a [`ValidationError::Rule`].
//!
//! These cover the common cases; anything application-specific is just a
//! closure passed to [`Param::with_rule`](crate::param::Param::with_rule).

use crate::error::ValidationError;

/// The resolved input must be non-empty.
///
/// Combined with [`Param::with_default`](crate::param::Param::with_default)
/// this expresses "required unless a default is configured": the rule sees
/// the default-substituted value, so a default satisfies it, while the
/// destination still reflects that no value was actually supplied.
pub fn not_empty() -> impl Fn(&str, &str) -> Result<(), ValidationError> {
    |name, input| {
        if input.is_empty() {
            Err(ValidationError::rule(
                name,
                format!("missing `{name}` parameter"),
            ))
        } else {
            Ok(())
        }
    }
}

/// The resolved input must be at least `min` characters long.
pub fn min_length(min: usize) -> impl Fn(&str, &str) -> Result<(), ValidationError> {
    move |name, input| {
        if input.chars().count() < min {
            Err(ValidationError::rule(
                name,
                format!("`{name}` must be at least {min} characters"),
            ))
        } else {
            Ok(())
        }
    }
}

/// The resolved input must be at most `max` characters long.
pub fn max_length(max: usize) -> impl Fn(&str, &str) -> Result<(), ValidationError> {
    move |name, input| {
        if input.chars().count() > max {
            Err(ValidationError::rule(
                name,
                format!("`{name}` must be at most {max} characters"),
            ))
        } else {
            Ok(())
        }
    }
}

/// The resolved input must equal one of the allowed values.
pub fn one_of(allowed: &[&str]) -> impl Fn(&str, &str) -> Result<(), ValidationError> {
    let allowed: Vec<String> = allowed.iter().map(|s| (*s).to_owned()).collect();
    move |name, input| {
        if allowed.iter().any(|candidate| candidate == input) {
            Ok(())
        } else {
            Err(ValidationError::rule(
                name,
                format!("`{name}` must be one of: {}", allowed.join(", ")),
            ))
        }
    }
}
