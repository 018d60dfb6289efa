use std::iter::Peekable;

use crate::{
    ast::{FunctionDecl, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Pos, Token},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression, parse_parenthesized},
            utils::{current_pos, expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// Dispatches on the leading token. A `fn` keyword needs one token of
/// lookahead: followed by an identifier it starts a function declaration,
/// otherwise it starts an anonymous function expression and the whole thing
/// is an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the statement.
///
/// # Returns
/// The parsed statement.
///
/// # Errors
/// Propagates any `ParseError` from the statement's components.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    match tokens.peek() {
        Some((Token::Let | Token::Const, _)) => parse_variable_declaration(tokens),
        Some((Token::Fn, _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();

            if let Some((Token::Identifier(_), _)) = lookahead.peek() {
                parse_function_declaration(tokens)
            } else {
                parse_expression_statement(tokens)
            }
        },
        Some((Token::Return, _)) => parse_return(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::For, _)) => parse_for(tokens),
        _ => parse_expression_statement(tokens),
    }
}

/// Parses a `let` or `const` variable declaration.
///
/// Declarations end with a mandatory semicolon. The initializer is optional
/// for `let`, in which case the variable is bound to null; `const` without an
/// initializer is a syntax error.
///
/// Grammar: `declaration := ("let" | "const") identifier ("=" expression)? ";"`
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let (constant, pos) = match tokens.next() {
        Some((Token::Let, pos)) => (false, *pos),
        Some((Token::Const, pos)) => (true, *pos),
        Some((tok, pos)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected 'let' or 'const', found {tok:?}"),
                                                     line:  pos.line,
                                                     col:   pos.col, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
    };
    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Semicolon, _)) => {
            if constant {
                return Err(ParseError::ConstantWithoutValue { name,
                                                              line: pos.line,
                                                              col: pos.col });
            }
            Ok(Statement::VariableDeclaration { name,
                                                constant,
                                                value: None,
                                                line: pos.line })
        },
        Some((Token::Equals, _)) => {
            let value = parse_expression(tokens)?;
            expect(tokens, &Token::Semicolon, "to end the declaration")?;
            Ok(Statement::VariableDeclaration { name,
                                                constant,
                                                value: Some(value),
                                                line: pos.line })
        },
        Some((tok, pos)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '=' or ';' after the variable name, found {tok:?}"),
                                              line:  pos.line,
                                              col:   pos.col, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0, col: 0 }),
    }
}

/// Parses a named function declaration.
///
/// The optional `: type` annotation after the parameter list declares the
/// return type tag checked at every call of the function.
///
/// Grammar: `function_decl := "fn" identifier "(" params ")" (":" identifier)? "{" block`
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = current_pos(tokens);
    tokens.next();

    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen, "to open the parameter list")?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let return_type = match tokens.peek() {
        Some((Token::Colon, _)) => {
            tokens.next();
            Some(parse_identifier(tokens)?)
        },
        _ => None,
    };

    expect(tokens, &Token::LBrace, "to open the function body")?;
    let body = parse_block(tokens)?;

    Ok(Statement::FunctionDeclaration(FunctionDecl { name,
                                                     params,
                                                     body,
                                                     return_type,
                                                     line: pos.line }))
}

/// Parses a `return` statement.
///
/// The value is optional: `return;` and a `return` directly before the
/// enclosing block's `}` both return null.
///
/// Grammar: `return := "return" expression?`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = current_pos(tokens);
    tokens.next();

    let value = match tokens.peek() {
        Some((Token::Semicolon | Token::RBrace, _)) | None => None,
        Some(_) => Some(parse_expression(tokens)?),
    };

    Ok(Statement::ReturnStatement { value,
                                    line: pos.line })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" "{" block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = current_pos(tokens);
    tokens.next();

    let condition = parse_parenthesized(tokens)?;
    expect(tokens, &Token::LBrace, "to open the loop body")?;
    let body = parse_block(tokens)?;

    Ok(Statement::WhileStatement { condition,
                                   body,
                                   line: pos.line })
}

/// Parses an `if` statement.
///
/// There is no `else`; conditional alternatives chain separate `if`
/// statements instead.
///
/// Grammar: `if := "if" "(" expression ")" "{" block`
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = current_pos(tokens);
    tokens.next();

    let condition = parse_parenthesized(tokens)?;
    expect(tokens, &Token::LBrace, "to open the branch body")?;
    let body = parse_block(tokens)?;

    Ok(Statement::IfStatement { condition,
                                body,
                                line: pos.line })
}

/// Parses a `for .. of` loop over an array.
///
/// Grammar: `for := "for" "(" identifier "of" expression ")" "{" block`
fn parse_for<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let pos = current_pos(tokens);
    tokens.next();

    expect(tokens, &Token::LParen, "to open the loop header")?;
    let variable = parse_identifier(tokens)?;
    expect(tokens, &Token::Of, "after the loop variable")?;
    let iterable = parse_expression(tokens)?;
    expect(tokens, &Token::RParen, "to close the loop header")?;
    expect(tokens, &Token::LBrace, "to open the loop body")?;
    let body = parse_block(tokens)?;

    Ok(Statement::ForStatement { variable,
                                 iterable,
                                 body,
                                 line: pos.line })
}

/// Parses a standalone expression as a statement.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, Pos)> + Clone
{
    let expr = parse_expression(tokens)?;
    Ok(Statement::Expression { line: expr.line_number(),
                               expr })
}
