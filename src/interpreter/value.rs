/// Core runtime value types.
///
/// Declares the `Value` enum covering every kind of runtime datum, the
/// `Function` and `NativeFunction` callables, and the conversion and
/// type-checking helpers used throughout the evaluator.
pub mod core;
/// The insertion-ordered map backing object values.
///
/// Object properties keep their declaration order, so the map is a thin
/// vector of key/value pairs rather than a hash map.
pub mod object;
