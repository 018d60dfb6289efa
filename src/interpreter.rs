/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Folds a leading minus into numeric literals during tokenization.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Implements the full operator precedence cascade.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages variable scopes, invokes functions, and produces results. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, and control flow.
/// - Reports runtime errors such as unresolved names or type mismatches.
pub mod evaluator;
/// The environment module implements the scope chain.
///
/// Environments hold variable bindings and link to a parent scope. Function
/// calls and block statements create child environments, and name resolution
/// walks the chain outward.
///
/// # Responsibilities
/// - Declares, assigns, and resolves variable bindings.
/// - Enforces constant bindings and duplicate-declaration rules.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation, such
/// as numbers, strings, booleans, objects, arrays, and the two function
/// kinds. It also provides conversion and type-checking helpers used
/// throughout evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements display formatting and type-tag helpers.
/// - Provides checked conversions used by operators and natives.
pub mod value;
/// The natives module provides the built-in host functions.
///
/// Natives are ordinary values installed in the global scope: output
/// functions, value conversion helpers, and the `Math` object.
///
/// # Responsibilities
/// - Builds the global scope with constants and natives.
/// - Implements each native's argument validation and behavior.
pub mod natives;
