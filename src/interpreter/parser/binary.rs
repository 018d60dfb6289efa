use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Pos, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a logical OR expression.
///
/// Both operands are always evaluated; `or` does not short-circuit.
///
/// Grammar: `logical_or := logical_and ("or" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first operand.
///
/// # Returns
/// The parsed expression node.
pub(in crate::interpreter::parser) fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens, parse_logical_and, &[Token::Or])
}

/// Parses a logical AND expression.
///
/// Grammar: `logical_and := equality ("and" equality)*`
fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens, parse_equality, &[Token::And])
}

/// Parses an equality comparison.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens,
                       parse_relational,
                       &[Token::EqualEqual, Token::BangEqual])
}

/// Parses a relational comparison.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens,
                       parse_additive,
                       &[Token::Less,
                         Token::Greater,
                         Token::LessEqual,
                         Token::GreaterEqual])
}

/// Parses an additive expression.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens, parse_multiplicative, &[Token::Plus, Token::Minus])
}

/// Parses a multiplicative expression.
///
/// Grammar: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens,
                       parse_exponent,
                       &[Token::Star, Token::Slash, Token::Percent])
}

/// Parses an exponential expression.
///
/// Exponentiation is left-associative like every other binary level, so
/// `2 ^ 3 ^ 2` groups as `(2 ^ 3) ^ 2`.
///
/// Grammar: `exponent := unary ("^" unary)*`
fn parse_exponent<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    parse_binary_level(tokens, parse_unary, &[Token::Caret])
}

/// Parses one left-associative binary precedence level.
///
/// Operands are parsed with `parse_operand`, the next-higher level. As long
/// as the next token is one of `operators`, another operand is parsed and the
/// accumulated expression becomes the left side.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first operand.
/// - `parse_operand`: Parser for the next precedence level.
/// - `operators`: The operator tokens handled at this level.
fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                             parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                             operators: &[Token])
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some((tok, pos)) = tokens.peek()
          && operators.contains(tok)
          && let Some(op) = token_to_binary_operator(tok)
    {
        let line = pos.line;
        tokens.next();

        let right = parse_operand(tokens)?;
        left = Expr::BinaryExp { left: Box::new(left),
                                 op,
                                 right: Box::new(right),
                                 line };
    }
    Ok(left)
}

/// Maps an operator token to its [`BinaryOperator`], if it is one.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}
