/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the language's
/// `f64` numbers and the native index and length types, without risking
/// silent data loss or rounding errors. All conversions either report exactly
/// why a value is unusable or signal it with `None`.
pub mod num;
