use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Program, Property},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            binary::parse_logical_or,
            statement::parse_statement,
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a program.
///
/// This is the entry point for parsing. Statements are parsed in order until
/// the stream is exhausted; stray semicolons between statements are skipped.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Pos)` pairs.
///
/// # Returns
/// The parsed [`Program`].
///
/// # Errors
/// Propagates any `ParseError` raised while parsing a statement.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut body = Vec::new();
    loop {
        match tokens.peek() {
            Some((Token::Semicolon, _)) => {
                tokens.next();
            },
            Some(_) => body.push(parse_statement(tokens)?),
            None => break,
        }
    }
    Ok(Program { body })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Pos)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_assignment(tokens)
}

/// Parses an assignment or compound assignment expression.
///
/// Assignment is a single optional trailing operator after the left-hand
/// side; it does not chain (`a = b = 3` is not one expression). Whether the
/// target is actually assignable is checked by the evaluator, not here.
///
/// Grammar: `assignment := object_literal (assign_op object_literal)?`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let assignee = parse_object_literal(tokens)?;

    let op = match tokens.peek() {
        Some((Token::Equals, _)) => None,
        Some((Token::PlusAssign, _)) => Some(BinaryOperator::Add),
        Some((Token::MinusAssign, _)) => Some(BinaryOperator::Sub),
        Some((Token::MulAssign, _)) => Some(BinaryOperator::Mul),
        Some((Token::DivAssign, _)) => Some(BinaryOperator::Div),
        Some((Token::ModAssign, _)) => Some(BinaryOperator::Mod),
        Some((Token::PowAssign, _)) => Some(BinaryOperator::Pow),
        _ => return Ok(assignee),
    };
    let line = assignee.line_number();
    tokens.next();

    let value = parse_object_literal(tokens)?;

    Ok(Expr::AssignmentExp { assignee: Box::new(assignee),
                             op,
                             value: Box::new(value),
                             line })
}

/// Parses an object literal, or falls through to the array level.
///
/// Each property is either `key: expression` or the shorthand `key`, which
/// resolves the value from the variable of the same name at evaluation time.
/// An empty object `{}` is accepted.
///
/// Grammar: `object := "{" (property ("," property)* ","?)? "}"`
fn parse_object_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let line = match tokens.peek() {
        Some((Token::LBrace, pos)) => pos.line,
        _ => return parse_array_literal(tokens),
    };
    tokens.next();

    let mut properties = Vec::new();
    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();

        return Ok(Expr::ObjectLiteral { properties, line });
    }
    loop {
        let key = parse_identifier(tokens)?;
        let value = match tokens.peek() {
            Some((Token::Colon, _)) => {
                tokens.next();
                Some(parse_expression(tokens)?)
            },
            _ => None,
        };
        properties.push(Property { key, value });

        match tokens.next() {
            Some((Token::Comma, _)) => {
                // Allows a trailing comma before the closing brace.
                if let Some((Token::RBrace, _)) = tokens.peek() {
                    tokens.next();
                    break;
                }
            },
            Some((Token::RBrace, _)) => break,
            Some((tok, pos)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or '}}' in object literal, found {tok:?}"),
                                                         line:  pos.line,
                                                         col:   pos.col, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
        }
    }

    Ok(Expr::ObjectLiteral { properties, line })
}

/// Parses an array literal or a spread expression, or falls through to the
/// binary operator levels.
///
/// A `fan` prefix parses its operand at this same level, so `fan arr` and
/// `[ fan a, fan b ]` both work. Standalone spreads shallow-copy their array
/// during evaluation.
///
/// Grammar: `array := "fan" array | "[" (expression ("," expression)*)? "]"`
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    match tokens.peek() {
        Some((Token::Fan, pos)) => {
            let line = pos.line;
            tokens.next();

            let argument = parse_array_literal(tokens)?;
            Ok(Expr::SpreadExp { argument: Box::new(argument),
                                 line })
        },
        Some((Token::LBracket, pos)) => {
            let line = pos.line;
            tokens.next();

            let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;
            Ok(Expr::ArrayLiteral { elements, line })
        },
        _ => parse_logical_or(tokens),
    }
}

/// Parses a parenthesized expression, consuming both parentheses.
///
/// Shared by grouping in primaries and the parenthesized condition headers of
/// `while` and `if` statements.
///
/// Grammar: `group := "(" expression ")"`
pub(in crate::interpreter::parser) fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect(tokens, &Token::LParen, "to open the expression")?;
    let expr = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "to close the expression")?;
    Ok(expr)
}
