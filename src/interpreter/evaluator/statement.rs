use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDecl, Statement},
    interpreter::{
        environment::{Environment, ScopeRef},
        evaluator::core::{EvalResult, evaluate, evaluate_expr},
        value::core::{Function, Value},
    },
};

/// Evaluates a `let` or `const` declaration and binds the variable.
///
/// A `let` without an initializer binds null. The declared value is also the
/// statement's result.
///
/// # Parameters
/// - `name`: The variable name.
/// - `constant`: Whether the binding is constant.
/// - `value`: The initializer expression, if any.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to declare in.
///
/// # Errors
/// - Propagates errors from the initializer.
/// - `VariableAlreadyDeclared` if `name` is already bound in this scope.
pub fn evaluate_variable_declaration(name: &str,
                                     constant: bool,
                                     value: Option<&Expr>,
                                     line: usize,
                                     env: &ScopeRef)
                                     -> EvalResult<Value> {
    let value = match value {
        Some(expr) => evaluate_expr(expr, env)?,
        None => Value::Null,
    };
    env.declare(name, value.clone(), constant, line)?;
    Ok(value)
}

/// Evaluates a function declaration, binding the function as a constant.
///
/// The function value is also the statement's result.
pub fn evaluate_function_declaration(decl: &FunctionDecl, env: &ScopeRef) -> EvalResult<Value> {
    let function = Value::Function(Rc::new(Function { name:        Some(decl.name.clone()),
                                                      params:      decl.params.clone(),
                                                      body:        decl.body.clone(),
                                                      return_type: decl.return_type.clone(), }));
    env.declare(&decl.name, function.clone(), true, decl.line)?;
    Ok(function)
}

/// Evaluates a `return` statement into a return signal.
///
/// The signal wraps the returned value (null when omitted) and travels
/// upward through enclosing blocks until a function-call boundary or the
/// program root unwraps it.
pub fn evaluate_return(value: Option<&Expr>, _line: usize, env: &ScopeRef) -> EvalResult<Value> {
    let value = match value {
        Some(expr) => evaluate_expr(expr, env)?,
        None => Value::Null,
    };
    Ok(Value::Return(Box::new(value)))
}

/// Evaluates a `while` loop.
///
/// The condition is re-evaluated before each iteration and must be a
/// boolean. Each iteration runs in a fresh child scope, so declarations in
/// the body do not collide across iterations. A return signal from the body
/// stops the loop and is passed through.
///
/// # Errors
/// - A type error if the condition is not a boolean.
/// - Propagates errors from the condition or the body.
pub fn evaluate_while(condition: &Expr,
                      body: &[Statement],
                      line: usize,
                      env: &ScopeRef)
                      -> EvalResult<Value> {
    while evaluate_expr(condition, env)?.as_bool(line)? {
        let scope = Environment::with_parent(env);
        let result = evaluate_body(body, &scope)?;
        if result.is_return() {
            return Ok(result);
        }
    }
    Ok(Value::Null)
}

/// Evaluates an `if` statement.
///
/// The branch body runs in a fresh child scope when the condition is true.
/// A return signal from the body is passed through.
///
/// # Errors
/// - A type error if the condition is not a boolean.
/// - Propagates errors from the condition or the body.
pub fn evaluate_if(condition: &Expr,
                   body: &[Statement],
                   line: usize,
                   env: &ScopeRef)
                   -> EvalResult<Value> {
    if evaluate_expr(condition, env)?.as_bool(line)? {
        let scope = Environment::with_parent(env);
        let result = evaluate_body(body, &scope)?;
        if result.is_return() {
            return Ok(result);
        }
    }
    Ok(Value::Null)
}

/// Evaluates a `for .. of` loop over an array.
///
/// The elements are snapshotted before the first iteration, so mutations of
/// the array inside the body do not affect the iteration. Each iteration
/// runs in a fresh child scope with the loop variable bound to the current
/// element.
///
/// # Errors
/// - A type error if the iterated value is not an array.
/// - Propagates errors from the iterable or the body.
pub fn evaluate_for(variable: &str,
                    iterable: &Expr,
                    body: &[Statement],
                    line: usize,
                    env: &ScopeRef)
                    -> EvalResult<Value> {
    let elements = evaluate_expr(iterable, env)?.as_array(line)?;
    let elements: Vec<Value> = elements.borrow().clone();

    for element in elements {
        let scope = Environment::with_parent(env);
        scope.declare(variable, element, false, line)?;
        let result = evaluate_body(body, &scope)?;
        if result.is_return() {
            return Ok(result);
        }
    }
    Ok(Value::Null)
}

/// Evaluates the statements of a block.
///
/// Stops early when a statement produces a return signal and yields that
/// signal; otherwise the block evaluates to null.
pub fn evaluate_body(body: &[Statement], env: &ScopeRef) -> EvalResult<Value> {
    for statement in body {
        let value = evaluate(statement, env)?;
        if value.is_return() {
            return Ok(value);
        }
    }
    Ok(Value::Null)
}
