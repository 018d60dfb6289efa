use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses the statements of a brace-delimited block.
///
/// The opening `{` must already be consumed; this function parses statements
/// until the matching `}` and consumes it. Stray semicolons between
/// statements are skipped.
///
/// Grammar: `block := statement* "}"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening `{`.
///
/// # Returns
/// The block's statements in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a statement fails to parse,
/// - the input ends before the closing `}`.
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some((Token::RBrace, _)) => {
                tokens.next();

                return Ok(body);
            },
            Some(_) => body.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
        }
    }
}
