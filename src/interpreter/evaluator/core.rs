use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::{assignment, binary, call, literal, member, statement, unary},
        value::core::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a program and returns the value of its last statement.
///
/// Statements are evaluated in order against the given environment. An empty
/// program evaluates to null. A top-level `return` stops the program and its
/// value becomes the result.
///
/// # Parameters
/// - `program`: The parsed program.
/// - `env`: The environment to evaluate against, usually the global scope.
///
/// # Returns
/// The value of the last evaluated statement.
///
/// # Errors
/// Propagates the first `RuntimeError` raised by any statement.
pub fn evaluate_program(program: &Program, env: &ScopeRef) -> EvalResult<Value> {
    let mut last = Value::Null;
    for statement in &program.body {
        last = evaluate(statement, env)?;
        if let Value::Return(inner) = last {
            return Ok(*inner);
        }
    }
    Ok(last)
}

/// Evaluates a single statement.
///
/// Every statement produces a value: declarations yield the declared value,
/// control-flow statements yield null unless a `return` fires inside them, in
/// which case the return signal is passed through to the enclosing caller.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: The environment to evaluate against.
///
/// # Returns
/// The statement's value.
///
/// # Errors
/// Propagates any `RuntimeError` from the statement's components.
pub fn evaluate(statement: &Statement, env: &ScopeRef) -> EvalResult<Value> {
    match statement {
        Statement::VariableDeclaration { name,
                                         constant,
                                         value,
                                         line, } => {
            statement::evaluate_variable_declaration(name, *constant, value.as_ref(), *line, env)
        },
        Statement::FunctionDeclaration(decl) => {
            statement::evaluate_function_declaration(decl, env)
        },
        Statement::ReturnStatement { value, line } => {
            statement::evaluate_return(value.as_ref(), *line, env)
        },
        Statement::WhileStatement { condition, body, line } => {
            statement::evaluate_while(condition, body, *line, env)
        },
        Statement::IfStatement { condition, body, line } => {
            statement::evaluate_if(condition, body, *line, env)
        },
        Statement::ForStatement { variable,
                                  iterable,
                                  body,
                                  line, } => {
            statement::evaluate_for(variable, iterable, body, *line, env)
        },
        Statement::Expression { expr, .. } => evaluate_expr(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches based on expression variant: literals, identifiers, unary and
/// binary operations, assignments, object and array literals, spreads,
/// member access, calls, and anonymous functions.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: The environment to evaluate against.
///
/// # Returns
/// The expression's value.
///
/// # Errors
/// Propagates any `RuntimeError` from the expression's components.
pub fn evaluate_expr(expr: &Expr, env: &ScopeRef) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name, line } => env.lookup(name, *line),
        Expr::NumberLiteral { value, .. } => Ok(Value::Number(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
        Expr::BinaryExp { left, op, right, line } => {
            binary::evaluate_binary(left, *op, right, *line, env)
        },
        Expr::UnaryExp { op, target, line } => unary::evaluate_unary(*op, target, *line, env),
        Expr::AssignmentExp { assignee,
                              op,
                              value,
                              line, } => {
            assignment::evaluate_assignment(assignee, *op, value, *line, env)
        },
        Expr::ObjectLiteral { properties, line } => {
            literal::evaluate_object_literal(properties, *line, env)
        },
        Expr::ArrayLiteral { elements, .. } => literal::evaluate_array_literal(elements, env),
        Expr::SpreadExp { argument, line } => literal::evaluate_spread(argument, *line, env),
        Expr::MemberExp { object,
                          property,
                          computed,
                          line, } => {
            member::evaluate_member(object, property, *computed, *line, env)
        },
        Expr::CallExp { caller, args, line } => call::evaluate_call(caller, args, *line, env),
        Expr::FunctionExp { params, body, .. } => {
            Ok(Value::Function(Rc::new(Function { name:        None,
                                                  params:      params.clone(),
                                                  body:        body.clone(),
                                                  return_type: None, })))
        },
    }
}
