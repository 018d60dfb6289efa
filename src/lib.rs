//! # rill
//!
//! rill is a small dynamically typed scripting language written in Rust.
//! It parses and evaluates programs with variables, functions, objects,
//! arrays, control flow, and a registry of built-in host functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including descriptions and source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scoping, and the native registry to provide a complete
/// runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment,
///   values, and natives.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator and the natives, converting between the language's `f64`
/// numbers and native index and length types without silent data loss.
pub mod util;

pub use crate::interpreter::{
    evaluator::core::evaluate_program as evaluate,
    natives::core::create_global_scope,
};

/// Parses source text into a program.
///
/// Tokenizes the whole input first, attaching a line and column to each
/// token, then parses the token stream into an AST.
///
/// # Errors
/// Returns a `ParseError` if the input contains unrecognizable text or does
/// not form valid statements.
///
/// # Examples
/// ```
/// use rill::parse;
///
/// let program = parse("let x = 1; println(x + 2);").unwrap();
/// assert_eq!(program.body.len(), 2);
///
/// assert!(parse("let = 3;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let pos = Pos { line: lexer.extras.line,
                        col:  lexer.span().start - lexer.extras.line_start + 1, };
        match token {
            Ok(tok) => tokens.push((tok, pos)),
            Err(()) => {
                return Err(ParseError::UnrecognizedInput { text: lexer.slice().to_string(),
                                                           line: pos.line,
                                                           col:  pos.col, });
            },
        }
    }

    parse_program(&mut tokens.iter().peekable())
}

/// Parses and evaluates source text against an environment.
///
/// This is the main entry point for running a program. The environment is
/// usually the global scope from [`create_global_scope`]; reusing one
/// environment across calls makes earlier definitions visible to later
/// programs, which is what the REPL relies on.
///
/// # Returns
/// The value of the program's last statement.
///
/// # Errors
/// Returns an error if parsing fails or a runtime error occurs.
///
/// # Examples
/// ```
/// use rill::{create_global_scope, execute};
///
/// let env = create_global_scope();
/// let result = execute("let x = 2 + 2; x * 10", &env).unwrap();
/// assert_eq!(result.to_string(), "40");
///
/// // 'y' is not defined.
/// assert!(execute("y + 1", &env).is_err());
/// ```
pub fn execute(source: &str,
               env: &interpreter::environment::ScopeRef)
               -> Result<interpreter::value::core::Value, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    Ok(evaluate(&program, env)?)
}
