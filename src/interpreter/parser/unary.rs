use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{current_pos, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a unary expression.
///
/// A leading `-`, `not`, or `!` applies to the operand parsed at this same
/// level, so unary operators nest. A `-` directly followed by a digit is
/// consumed by the lexer as a negative number literal and never reaches this
/// function.
///
/// Grammar: `unary := ("-" | "not" | "!") unary | call_member`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
///
/// # Returns
/// The parsed expression node.
pub(in crate::interpreter::parser) fn parse_unary<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (op, line) = match tokens.peek() {
        Some((Token::Minus, pos)) => (UnaryOperator::Negate, pos.line),
        Some((Token::Not | Token::Bang, pos)) => (UnaryOperator::Not, pos.line),
        _ => return parse_call_member(tokens),
    };
    tokens.next();

    let target = parse_unary(tokens)?;
    Ok(Expr::UnaryExp { op,
                        target: Box::new(target),
                        line })
}

/// Parses a primary expression followed by its postfix chain.
///
/// Postfixes are applied left to right, so `a.b[c](d).e` nests the way it
/// reads: each member access or call wraps everything parsed so far.
///
/// Grammar: `call_member := primary ("." identifier | "[" expression "]" | "(" args ")")*`
fn parse_call_member<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut expr = parse_primary(tokens)?;
    loop {
        match tokens.peek() {
            Some((Token::Dot, pos)) => {
                let line = pos.line;
                tokens.next();

                let name_pos = current_pos(tokens);
                let name = parse_identifier(tokens)?;
                expr = Expr::MemberExp { object:   Box::new(expr),
                                         property: Box::new(Expr::Identifier { name,
                                                                               line: name_pos.line, }),
                                         computed: false,
                                         line };
            },
            Some((Token::LBracket, pos)) => {
                let line = pos.line;
                tokens.next();

                let key = parse_expression(tokens)?;
                expect(tokens, &Token::RBracket, "to close the index")?;
                expr = Expr::MemberExp { object: Box::new(expr),
                                         property: Box::new(key),
                                         computed: true,
                                         line };
            },
            Some((Token::LParen, pos)) => {
                let line = pos.line;
                tokens.next();

                let args = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
                expr = Expr::CallExp { caller: Box::new(expr),
                                       args,
                                       line };
            },
            _ => return Ok(expr),
        }
    }
}

/// Parses a primary expression.
///
/// Primaries are the leaves of the expression grammar: literals, identifiers,
/// parenthesized groups, and anonymous function expressions.
///
/// Grammar: `primary := identifier | number | string | "(" expression ")" | function`
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token cannot start a primary expression,
/// - the input ends unexpectedly.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    match tokens.next() {
        Some((Token::Identifier(name), pos)) => Ok(Expr::Identifier { name: name.clone(),
                                                                      line: pos.line, }),
        Some((Token::Number(value), pos)) => Ok(Expr::NumberLiteral { value: *value,
                                                                      line:  pos.line, }),
        Some((Token::Str(value), pos)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                   line:  pos.line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen, "to close the grouped expression")?;
            Ok(expr)
        },
        Some((Token::Fn, pos)) => parse_function_expression(tokens, pos.line),
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {tok:?}"),
                                              line:  pos.line,
                                              col:   pos.col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
    }
}

/// Parses an anonymous function expression.
///
/// Two body forms exist: `=> expression`, which wraps the expression in a
/// single-statement body whose value becomes the implicit return, and a
/// `{ .. }` statement block.
///
/// Grammar: `function := "fn" "(" params ")" ("=>" expression | "{" block)`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the `fn` keyword.
/// - `line`: Line number of the `fn` token.
fn parse_function_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    expect(tokens, &Token::LParen, "to open the parameter list")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let body = match tokens.next() {
        Some((Token::Arrow, _)) => {
            let expr = parse_expression(tokens)?;
            vec![Statement::Expression { line: expr.line_number(),
                                         expr }]
        },
        Some((Token::LBrace, _)) => parse_block(tokens)?,
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '=>' or '{{' after parameters, found {tok:?}"),
                                                     line:  pos.line,
                                                     col:   pos.col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
    };

    Ok(Expr::FunctionExp { params, body, line })
}
