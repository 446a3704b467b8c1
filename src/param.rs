//! Parameter descriptors: the configuration surface of the pipeline.
//!
//! A [`Param`] pairs one raw string input with its destination
//! [`Target`](crate::target::Target) and validation configuration. Callers
//! build a list of descriptors immediately before calling
//! [`validate`](crate::validate::validate) and discard them after; the
//! pipeline holds no state across calls.

use crate::error::ValidationError;
use crate::target::Target;

/// A validation rule, evaluated before coercion.
///
/// Receives `(name, resolved_input)` where the resolved input is the raw
/// input if non-empty, else the descriptor's default.
pub type Rule<'a> = Box<dyn Fn(&str, &str) -> Result<(), ValidationError> + 'a>;

/// A custom coercion, replacing the built-in table for one descriptor.
///
/// Receives `(raw_input, name)`; the destination is captured by the
/// closure itself. Only invoked for non-empty input — an empty input skips
/// coercion entirely, so the handler's destination keeps whatever absence
/// representation it started with.
pub type Handler<'a> = Box<dyn FnMut(&str, &str) -> Result<(), ValidationError> + 'a>;

/// One parameter to validate and coerce.
///
/// # Examples
///
/// ```
/// use paramcast::{validate, rules, Param, Target};
///
/// let mut page: u32 = 0;
/// let mut order = String::new();
///
/// validate(vec![
///     Param::new(Target::U32(&mut page), "page", "3"),
///     Param::new(Target::Text(&mut order), "order", "desc")
///         .with_rule(rules::one_of(&["asc", "desc"])),
/// ])?;
///
/// assert_eq!(page, 3);
/// assert_eq!(order, "desc");
/// # Ok::<(), paramcast::ValidateError>(())
/// ```
pub struct Param<'a> {
    pub(crate) target: Target<'a>,
    pub(crate) name: String,
    pub(crate) input: String,
    pub(crate) default: String,
    pub(crate) rules: Vec<Rule<'a>>,
    pub(crate) handler: Option<Handler<'a>>,
}

impl<'a> Param<'a> {
    /// Creates a descriptor with no rules, no default, and built-in
    /// coercion resolved from the target.
    #[must_use]
    pub fn new(target: Target<'a>, name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            target,
            name: name.into(),
            input: input.into(),
            default: String::new(),
            rules: Vec::new(),
            handler: None,
        }
    }

    /// Sets the default substituted for rule evaluation when the input is
    /// empty. Defaults never reach coercion: an empty input always leaves
    /// the destination absent, whatever the default says.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Appends one rule. Rules run in the order they were added.
    #[must_use]
    pub fn with_rule(
        mut self,
        rule: impl Fn(&str, &str) -> Result<(), ValidationError> + 'a,
    ) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a batch of already-boxed rules, preserving their order.
    #[must_use]
    pub fn with_rules(mut self, rules: Vec<Rule<'a>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets a custom coercion for this descriptor. A handler always wins
    /// over the built-in table, and is required for [`Target::Custom`].
    #[must_use]
    pub fn with_handler(
        mut self,
        handler: impl FnMut(&str, &str) -> Result<(), ValidationError> + 'a,
    ) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// The field name, as used in error messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The input rules see: raw input if non-empty, else the default.
    pub(crate) fn resolved_input(&self) -> &str {
        if self.input.is_empty() {
            &self.default
        } else {
            &self.input
        }
    }
}
