/// Core evaluation dispatch.
///
/// Contains the program entry point and the statement and expression
/// dispatchers that route AST nodes to their evaluation logic.
pub mod core;

/// Statement evaluation.
///
/// Declarations, `return`, and the control-flow statements, including the
/// propagation of return signals out of nested blocks.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, string concatenation, comparisons, and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Assignment evaluation.
///
/// Plain and compound assignment to variables and to object or array
/// members, including the compound operators' type rules.
pub mod assignment;

/// Member access evaluation.
///
/// Reading and writing `object.name` and the computed `object[expr]` forms
/// for objects and arrays.
pub mod member;

/// Function call evaluation.
///
/// Handles user-defined and native function calls, parameter binding, the
/// call-site scope chain, and return type checking.
pub mod call;

/// Literal construction.
///
/// Object literals with shorthand properties, array literals with inline
/// spreads, and standalone spread copies.
pub mod literal;
