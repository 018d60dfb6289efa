/// Brace-delimited statement blocks.
///
/// Parses the `{ statement* }` bodies shared by function declarations,
/// loops, and `if` statements.
pub mod block;
/// Entry points and the low-precedence expression levels.
///
/// Holds the program loop, the assignment level, and the object/array
/// literal levels of the precedence cascade.
pub mod core;
/// Statement parsing.
///
/// Dispatches on the leading token to variable declarations, function
/// declarations, `return`, `while`, `if`, `for`, or expression statements.
pub mod statement;
/// Binary operator precedence levels.
///
/// Logical, equality, relational, additive, multiplicative, and exponential
/// expressions, all left-associative.
pub mod binary;
/// High-precedence expressions.
///
/// Unary operators, the call/member postfix chain, and primary expressions
/// including anonymous functions.
pub mod unary;
/// Shared parsing utilities.
pub mod utils;
