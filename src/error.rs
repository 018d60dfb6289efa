/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, unterminated
/// constructs, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unresolved identifiers, reassignment of constants, type
/// rule violations, and missing object properties.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
