use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts an `f64` to an array index if it is a safe non-negative integer.
///
/// # Parameters
/// - `value`: The numeric value used as an index.
///
/// # Returns
/// - `Some(usize)`: The index, if `value` is finite, non-negative, integral,
///   and exactly representable.
/// - `None`: Otherwise.
///
/// # Example
/// ```
/// use rill::util::num::f64_to_index;
///
/// assert_eq!(f64_to_index(3.0), Some(3));
/// assert_eq!(f64_to_index(-1.0), None);
/// assert_eq!(f64_to_index(1.5), None);
/// assert_eq!(f64_to_index(f64::NAN), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_index(value: f64) -> Option<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
        return None;
    }
    if value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    Some(value as usize)
}

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// # Parameters
/// - `value`: The value to convert.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// - `Ok(f64)`: The converted value if it is safe.
///
/// # Errors
/// A type error if the value exceeds `MAX_SAFE_U64_INT`.
///
/// # Example
/// ```
/// use rill::util::num::usize_to_f64_checked;
///
/// let val = usize_to_f64_checked(100, 0).unwrap();
/// assert_eq!(val, 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(RuntimeError::type_error(format!("value {value} is too large for a number"),
                                            line));
    }
    Ok(value as f64)
}
