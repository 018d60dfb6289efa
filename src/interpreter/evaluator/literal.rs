use crate::{
    ast::{Expr, Property},
    interpreter::{
        environment::ScopeRef,
        evaluator::core::{EvalResult, evaluate_expr},
        value::{core::Value, object::ObjectMap},
    },
};

/// Evaluates an object literal into a fresh object value.
///
/// Shorthand properties (`{ key }`) look up the variable named `key` in the
/// current scope for their value. Duplicate keys keep the last value.
///
/// # Parameters
/// - `properties`: The literal's properties in declaration order.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Errors
/// - `UnresolvedIdentifier` for a shorthand key with no matching variable.
/// - Propagates errors from property value expressions.
pub fn evaluate_object_literal(properties: &[Property],
                               line: usize,
                               env: &ScopeRef)
                               -> EvalResult<Value> {
    let mut map = ObjectMap::new();
    for property in properties {
        let value = match &property.value {
            Some(expr) => evaluate_expr(expr, env)?,
            None => env.lookup(&property.key, line)?,
        };
        map.insert(property.key.clone(), value);
    }
    Ok(Value::from(map))
}

/// Evaluates an array literal into a fresh array value.
///
/// A `fan` spread element splices the spread array's elements in place;
/// every other element contributes one value.
///
/// # Errors
/// - A type error if a spread operand is not an array.
/// - Propagates errors from element expressions.
pub fn evaluate_array_literal(elements: &[Expr], env: &ScopeRef) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        if let Expr::SpreadExp { argument, line } = element {
            let spread = evaluate_expr(argument, env)?.as_array(*line)?;
            values.extend(spread.borrow().iter().cloned());
        } else {
            values.push(evaluate_expr(element, env)?);
        }
    }
    Ok(Value::from(values))
}

/// Evaluates a standalone spread into a shallow copy of its array.
///
/// The copy shares no storage with the original at the top level, but
/// nested objects and arrays are still aliased.
///
/// # Errors
/// - A type error if the operand is not an array.
/// - Propagates errors from the operand expression.
pub fn evaluate_spread(argument: &Expr, line: usize, env: &ScopeRef) -> EvalResult<Value> {
    let elements = evaluate_expr(argument, env)?.as_array(line)?;
    let copy: Vec<Value> = elements.borrow().clone();
    Ok(Value::from(copy))
}
