//! # Paramcast: string-parameter validation and typed coercion
//!
//! Paramcast turns named string inputs — HTTP form fields, query
//! parameters, anything that arrives as text — into typed values, running
//! caller-supplied validation rules first and type-specific parsing
//! second. It performs no I/O and knows nothing about HTTP; a host
//! application extracts the raw strings, describes each field with a
//! [`Param`], and calls [`validate`].
//!
//! ## Core Concepts
//!
//! - **Descriptors** ([`Param`]): one raw input paired with a destination
//!   and its validation configuration
//! - **Targets** ([`Target`]): the supported destination shapes, each
//!   holding an exclusive borrow of the caller's slot
//! - **Rules**: predicates over `(name, resolved_input)`, evaluated before
//!   any coercion
//! - **Handlers**: custom coercion closures for destination types the
//!   built-in table does not cover
//!
//! ## Quick Start
//!
//! ```
//! use paramcast::{validate, rules, Param, Target};
//!
//! let mut user_id: i64 = 0;
//! let mut limit: Option<i64> = None;
//! let mut order = String::new();
//!
//! validate(vec![
//!     Param::new(Target::I64(&mut user_id), "user_id", "42")
//!         .with_rule(rules::not_empty()),
//!     // Empty input: coercion is skipped, the nullable slot is None.
//!     Param::new(Target::OptI64(&mut limit), "limit", ""),
//!     Param::new(Target::Text(&mut order), "order", "desc")
//!         .with_rule(rules::one_of(&["asc", "desc"])),
//! ])?;
//!
//! assert_eq!(user_id, 42);
//! assert_eq!(limit, None);
//! assert_eq!(order, "desc");
//! # Ok::<(), paramcast::ValidateError>(())
//! ```
//!
//! ## Defaults
//!
//! A default participates in rule evaluation only. It never reaches
//! coercion: an empty input always leaves the destination absent, so the
//! host can tell "the user sent nothing" apart from "the user sent the
//! default value".
//!
//! ```
//! use paramcast::{validate, rules, Param, Target};
//!
//! let mut page = String::new();
//! validate(vec![
//!     Param::new(Target::Text(&mut page), "page", "")
//!         .with_default("1")
//!         .with_rule(rules::not_empty()), // sees "1", passes
//! ])?;
//!
//! assert_eq!(page, ""); // the default was not coerced in
//! # Ok::<(), paramcast::ValidateError>(())
//! ```
//!
//! ## Custom destination types
//!
//! The built-in table covers primitives, RFC 3339 timestamps, and their
//! nullable variants. For anything else, attach a handler that captures
//! its own destination:
//!
//! ```
//! use paramcast::{validate, Param, Target, ValidationError};
//!
//! #[derive(Default, PartialEq, Debug)]
//! struct Sku(String);
//!
//! let mut sku = Sku::default();
//! validate(vec![
//!     Param::new(Target::Custom, "sku", "AB-1234").with_handler(|raw, name| {
//!         if raw.len() == 7 && raw.as_bytes()[2] == b'-' {
//!             sku = Sku(raw.to_owned());
//!             Ok(())
//!         } else {
//!             Err(ValidationError::rule(name, format!("`{name}` is not a SKU")))
//!         }
//!     }),
//! ])?;
//!
//! assert_eq!(sku, Sku("AB-1234".into()));
//! # Ok::<(), paramcast::ValidateError>(())
//! ```
//!
//! ## Error classes
//!
//! Bad input produces a [`ValidationError`], whose message the host
//! surfaces to the caller. A misconfigured descriptor list — a
//! [`Target::Custom`] with no handler — produces a [`ConfigError`]
//! instead: that is a code defect, not something to show an end user, and
//! the two are distinct variants of [`ValidateError`] so hosts and tests
//! can tell them apart.
//!
//! ## Module Guide
//!
//! - [`param`] - Descriptors, rule and handler signatures
//! - [`target`] - Destination shapes and the built-in coercion table
//! - [`rules`] - Stock rules (`not_empty`, length bounds, `one_of`)
//! - [`validate`](mod@validate) - The pipeline
//! - [`error`] - `ValidationError`, `ConfigError`, `ValidateError`

pub mod error;
pub mod param;
pub mod rules;
pub mod target;
pub mod validate;

pub use error::{ConfigError, ValidateError, ValidationError};
pub use param::{Handler, Param, Rule};
pub use target::{NativeWidth, Target};
pub use validate::validate;
