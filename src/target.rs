//! Destination targets and the built-in coercion table.
//!
//! [`Target`] is a sum type over every destination shape the crate can
//! coerce into. Each variant holds an exclusive borrow of the caller's
//! slot, so a destination can be written by at most one descriptor per
//! pipeline call and cross-thread reuse is a compile error rather than a
//! caller obligation.
//!
//! Coercion is dispatched by a single `match` over the variant: the
//! "registry" is a closed table resolved at compile time, and an
//! unsupported destination is unrepresentable instead of being a runtime
//! lookup miss. The escape hatch for types this table does not know is
//! [`Target::Custom`] together with a descriptor-level handler (see
//! [`Param::with_handler`](crate::param::Param::with_handler)).

use std::str::FromStr;

use chrono::{DateTime, FixedOffset};

use crate::error::ValidationError;

/// Expected-type phrase for RFC 3339 timestamps, shared by the plain and
/// nullable variants.
const RFC3339_EXPECTED: &str = "an RFC 3339 date-time (e.g. 2012-11-01T22:08:41+00:00)";

/// Numeric width used for platform-native integer targets.
///
/// The parse bounds of [`Target::Isize`] and [`Target::Usize`] follow this
/// configured width, never the build target's pointer width. Callers state
/// the width they mean; nothing is inferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeWidth {
    /// Bound native integers to 32 bits.
    W32,
    /// Bound native integers to 64 bits.
    W64,
}

/// The destination slot of one parameter descriptor.
///
/// Plain variants keep their prior value when the input is empty; nullable
/// (`Opt*`) variants are explicitly set to `None` in that case. A failed
/// parse never writes anything.
///
/// # Examples
///
/// ```
/// use paramcast::{validate, Param, Target};
///
/// let mut id: i64 = 0;
/// let mut page: Option<i64> = None;
///
/// validate(vec![
///     Param::new(Target::I64(&mut id), "id", "42"),
///     Param::new(Target::OptI64(&mut page), "page", ""),
/// ])?;
///
/// assert_eq!(id, 42);
/// assert_eq!(page, None);
/// # Ok::<(), paramcast::ValidateError>(())
/// ```
pub enum Target<'a> {
    /// UTF-8 text; coercion is a plain copy and cannot fail.
    Text(&'a mut String),
    /// 32-bit IEEE float.
    F32(&'a mut f32),
    /// 64-bit IEEE float.
    F64(&'a mut f64),
    /// Boolean, exactly `"true"` or `"false"`.
    Bool(&'a mut bool),
    /// 8-bit signed integer.
    I8(&'a mut i8),
    /// 16-bit signed integer.
    I16(&'a mut i16),
    /// 32-bit signed integer.
    I32(&'a mut i32),
    /// 64-bit signed integer.
    I64(&'a mut i64),
    /// Native-width signed integer, bounded by the configured width.
    Isize {
        /// Destination slot.
        slot: &'a mut isize,
        /// Parse bounds to apply.
        width: NativeWidth,
    },
    /// 8-bit unsigned integer.
    U8(&'a mut u8),
    /// 16-bit unsigned integer.
    U16(&'a mut u16),
    /// 32-bit unsigned integer.
    U32(&'a mut u32),
    /// 64-bit unsigned integer.
    U64(&'a mut u64),
    /// Native-width unsigned integer, bounded by the configured width.
    Usize {
        /// Destination slot.
        slot: &'a mut usize,
        /// Parse bounds to apply.
        width: NativeWidth,
    },
    /// RFC 3339 timestamp.
    Timestamp(&'a mut DateTime<FixedOffset>),
    /// Nullable text: empty input marks the value absent.
    OptText(&'a mut Option<String>),
    /// Nullable 64-bit float.
    OptF64(&'a mut Option<f64>),
    /// Nullable boolean.
    OptBool(&'a mut Option<bool>),
    /// Nullable 64-bit signed integer.
    OptI64(&'a mut Option<i64>),
    /// Nullable RFC 3339 timestamp.
    OptTimestamp(&'a mut Option<DateTime<FixedOffset>>),
    /// A destination owned by the descriptor's handler closure.
    ///
    /// The built-in table knows nothing about it; a descriptor using this
    /// variant without a handler is a
    /// [`ConfigError::MissingHandler`](crate::error::ConfigError::MissingHandler).
    Custom,
}

impl Target<'_> {
    /// Whether the built-in table can coerce into this target.
    #[must_use]
    pub fn has_builtin(&self) -> bool {
        !matches!(self, Target::Custom)
    }

    /// Records that no value was supplied.
    ///
    /// Nullable targets are set to `None`; everything else is left at its
    /// prior value.
    pub(crate) fn mark_absent(&mut self) {
        match self {
            Target::OptText(slot) => **slot = None,
            Target::OptF64(slot) => **slot = None,
            Target::OptBool(slot) => **slot = None,
            Target::OptI64(slot) => **slot = None,
            Target::OptTimestamp(slot) => **slot = None,
            _ => {}
        }
    }

    /// Parses `raw` and writes the result into the slot.
    ///
    /// Only called with non-empty input; empty input goes through
    /// [`mark_absent`](Self::mark_absent) instead.
    pub(crate) fn coerce(&mut self, name: &str, raw: &str) -> Result<(), ValidationError> {
        match self {
            Target::Text(slot) => {
                **slot = raw.to_owned();
                Ok(())
            }
            Target::F32(slot) => parse_into(*slot, name, raw, "a float32"),
            Target::F64(slot) => parse_into(*slot, name, raw, "a float64"),
            Target::Bool(slot) => parse_into(*slot, name, raw, "a bool"),
            Target::I8(slot) => parse_into(*slot, name, raw, "an int8"),
            Target::I16(slot) => parse_into(*slot, name, raw, "an int16"),
            Target::I32(slot) => parse_into(*slot, name, raw, "an int32"),
            Target::I64(slot) => parse_into(*slot, name, raw, "an int64"),
            Target::Isize { slot, width } => {
                let parsed = match width {
                    NativeWidth::W32 => raw.parse::<i32>().map(i64::from),
                    NativeWidth::W64 => raw.parse::<i64>(),
                }
                .map_err(|_| ValidationError::type_mismatch(name, "an int"))?;
                **slot = isize::try_from(parsed)
                    .map_err(|_| ValidationError::type_mismatch(name, "an int"))?;
                Ok(())
            }
            Target::U8(slot) => parse_into(*slot, name, raw, "a uint8"),
            Target::U16(slot) => parse_into(*slot, name, raw, "a uint16"),
            Target::U32(slot) => parse_into(*slot, name, raw, "a uint32"),
            Target::U64(slot) => parse_into(*slot, name, raw, "a uint64"),
            Target::Usize { slot, width } => {
                let parsed = match width {
                    NativeWidth::W32 => raw.parse::<u32>().map(u64::from),
                    NativeWidth::W64 => raw.parse::<u64>(),
                }
                .map_err(|_| ValidationError::type_mismatch(name, "a uint"))?;
                **slot = usize::try_from(parsed)
                    .map_err(|_| ValidationError::type_mismatch(name, "a uint"))?;
                Ok(())
            }
            Target::Timestamp(slot) => {
                **slot = DateTime::parse_from_rfc3339(raw)
                    .map_err(|_| ValidationError::type_mismatch(name, RFC3339_EXPECTED))?;
                Ok(())
            }
            Target::OptText(slot) => {
                **slot = Some(raw.to_owned());
                Ok(())
            }
            Target::OptF64(slot) => parse_opt(*slot, name, raw, "a float64"),
            Target::OptBool(slot) => parse_opt(*slot, name, raw, "a bool"),
            Target::OptI64(slot) => parse_opt(*slot, name, raw, "an int64"),
            Target::OptTimestamp(slot) => {
                **slot = Some(
                    DateTime::parse_from_rfc3339(raw)
                        .map_err(|_| ValidationError::type_mismatch(name, RFC3339_EXPECTED))?,
                );
                Ok(())
            }
            // Guarded in validate(): a custom target without a handler is a
            // ConfigError before coercion is ever reached.
            Target::Custom => unreachable!("custom targets are coerced by their handler"),
        }
    }
}

/// Parse and assign, or fail without touching the slot.
fn parse_into<T: FromStr>(
    slot: &mut T,
    name: &str,
    raw: &str,
    expected: &'static str,
) -> Result<(), ValidationError> {
    let value = raw
        .parse::<T>()
        .map_err(|_| ValidationError::type_mismatch(name, expected))?;
    *slot = value;
    Ok(())
}

/// Nullable counterpart of [`parse_into`]: a failed parse leaves the
/// absence marker in its prior state.
fn parse_opt<T: FromStr>(
    slot: &mut Option<T>,
    name: &str,
    raw: &str,
    expected: &'static str,
) -> Result<(), ValidationError> {
    let value = raw
        .parse::<T>()
        .map_err(|_| ValidationError::type_mismatch(name, expected))?;
    *slot = Some(value);
    Ok(())
}
