/// The native registry and global scope bootstrap.
///
/// Builds the global environment every program starts from: the `null`,
/// `true`, and `false` constants, the free-standing natives, and the `Math`
/// object.
pub mod core;

/// The `Math` object's functions.
pub mod math;

/// Output natives: `println`, `print`, and `inspect`.
pub mod io;

/// Value inspection and conversion natives: `len`, `copy`, `range`,
/// `String`, `Number`, and `date`.
pub mod convert;
