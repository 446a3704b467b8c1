//! The validation and coercion pipeline.

use tracing::{instrument, trace};

use crate::error::{ConfigError, ValidateError};
use crate::param::Param;

/// Validates and coerces every descriptor, in list order.
///
/// For each descriptor:
///
/// 1. The resolved input is computed: raw input if non-empty, else the
///    default.
/// 2. Rules run in order against `(name, resolved_input)`. The first
///    failure aborts the whole call; later rules and later descriptors are
///    never evaluated and their destinations are never written.
/// 3. Coercion is resolved: the descriptor's handler if set, else the
///    built-in table selected by the target's variant. A
///    [`Target::Custom`](crate::target::Target::Custom) descriptor with no
///    handler is a [`ConfigError::MissingHandler`], raised before the
///    input is even inspected.
/// 4. Non-empty input is coerced from the **raw** input. Defaults never
///    reach coercion.
/// 5. Empty input skips coercion: nullable targets are marked absent,
///    plain targets keep their prior value.
///
/// Returns `Ok(())` only when every descriptor passes every rule and
/// every coercion.
///
/// # Examples
///
/// ```
/// use paramcast::{validate, Param, Target};
///
/// let mut id: i64 = 0;
/// let err = validate(vec![
///     Param::new(Target::I64(&mut id), "id", "42a"),
/// ])
/// .unwrap_err();
///
/// assert_eq!(
///     err.to_string(),
///     "Invalid `id` parameter, `id` must be an int64",
/// );
/// assert_eq!(id, 0);
/// ```
#[instrument(skip(params), fields(descriptors = params.len()), err)]
pub fn validate(params: Vec<Param<'_>>) -> Result<(), ValidateError> {
    for mut param in params {
        for rule in &param.rules {
            rule(&param.name, param.resolved_input())?;
        }

        // A custom target with nothing to coerce it is a programming
        // mistake, reported before the empty-input branch can mask it.
        if param.handler.is_none() && !param.target.has_builtin() {
            return Err(ConfigError::MissingHandler { name: param.name }.into());
        }

        if param.input.is_empty() {
            param.target.mark_absent();
            trace!(name = %param.name, "empty input, coercion skipped");
            continue;
        }

        match param.handler.as_mut() {
            Some(handler) => handler(&param.input, &param.name)?,
            None => param.target.coerce(&param.name, &param.input)?,
        }
        trace!(name = %param.name, "coerced");
    }
    Ok(())
}
