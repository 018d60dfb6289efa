use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeRef},
        evaluator::core::{EvalResult, evaluate, evaluate_expr},
        value::core::{Function, Value},
    },
};

/// Evaluates a call expression.
///
/// The callee and then every argument are evaluated in order; the callee
/// must be a function or native function value.
///
/// # Parameters
/// - `caller`: The expression being called.
/// - `args`: The argument expressions.
/// - `line`: Source line for error reporting.
/// - `env`: The environment active at the call site.
///
/// # Returns
/// The call's result.
///
/// # Errors
/// - A type error if the callee is not callable.
/// - Propagates errors from the callee, the arguments, and the body.
pub fn evaluate_call(caller: &Expr,
                     args: &[Expr],
                     line: usize,
                     env: &ScopeRef)
                     -> EvalResult<Value> {
    let callee = evaluate_expr(caller, env)?;
    let args = args.iter()
                   .map(|arg| evaluate_expr(arg, env))
                   .collect::<EvalResult<Vec<Value>>>()?;

    match callee {
        Value::NativeFunction(native) => (native.func)(&args, env, line),
        Value::Function(function) => call_function(&function, &args, env, line),
        other => Err(RuntimeError::type_error(format!("cannot call a value of type {}",
                                                      other.type_name()),
                                              line)),
    }
}

/// Invokes a user-defined function.
///
/// The call scope's parent is the environment active at the call site, so
/// the body resolves free names through the caller's scope chain. Parameters
/// are bound positionally; missing arguments bind to null and extra
/// arguments are ignored.
///
/// A `return` anywhere in the body ends the call with its value. Without
/// one, the call yields null, except for a single-statement anonymous
/// function, whose lone statement's value becomes the implicit result.
///
/// # Parameters
/// - `function`: The function being invoked.
/// - `args`: The evaluated argument values.
/// - `caller_env`: The environment active at the call site.
/// - `line`: Source line for error reporting.
///
/// # Errors
/// - A type error if a declared return type does not match the returned
///   value's type.
/// - Propagates errors from the body.
pub fn call_function(function: &Function,
                     args: &[Value],
                     caller_env: &ScopeRef,
                     line: usize)
                     -> EvalResult<Value> {
    let scope = Environment::with_parent(caller_env);
    for (position, param) in function.params.iter().enumerate() {
        let value = args.get(position).cloned().unwrap_or(Value::Null);
        scope.declare(param, value, false, line)?;
    }

    let mut last = Value::Null;
    for statement in &function.body {
        last = evaluate(statement, &scope)?;
        if let Value::Return(inner) = last {
            return check_return_type(function, *inner, line);
        }
    }

    if function.name.is_none() && function.body.len() == 1 {
        return Ok(last);
    }
    check_return_type(function, Value::Null, line)
}

/// Checks a returned value against the function's declared return type.
///
/// Functions without a declared type accept anything.
fn check_return_type(function: &Function, value: Value, line: usize) -> EvalResult<Value> {
    if let Some(expected) = &function.return_type
       && value.type_name() != expected
    {
        let name = function.name.as_deref().unwrap_or("<anonymous>");
        return Err(RuntimeError::type_error(format!("function '{name}' declared to return {expected} but returned {}",
                                                    value.type_name()),
                                            line));
    }
    Ok(value)
}
