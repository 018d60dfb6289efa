use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::core::{EvalResult, evaluate_expr},
        value::core::Value,
    },
    util::num::f64_to_index,
};

/// Evaluates a member read, either `object.name` or `object[expr]`.
///
/// The two forms differ on missing members: a dot access on an absent
/// property is an error, while a computed access on an absent property or an
/// out-of-range index yields null.
///
/// # Parameters
/// - `object`: The expression whose member is read.
/// - `property`: The property identifier or the computed key expression.
/// - `computed`: Whether the access is the `object[expr]` form.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Errors
/// - `MissingProperty` for a dot access on an absent property, or for
///   member access on a value that is neither an object nor an array.
/// - A type error if the key type does not match the target.
/// - Propagates errors from the object and key expressions.
pub fn evaluate_member(object: &Expr,
                       property: &Expr,
                       computed: bool,
                       line: usize,
                       env: &ScopeRef)
                       -> EvalResult<Value> {
    let target = evaluate_expr(object, env)?;
    if computed {
        let key = evaluate_expr(property, env)?;
        return read_computed(&target, &key, line);
    }

    let Expr::Identifier { name, .. } = property else {
        return Err(RuntimeError::type_error("property name must be an identifier", line));
    };
    match &target {
        Value::Object(properties) => {
            properties.borrow()
                      .get(name)
                      .cloned()
                      .ok_or_else(|| RuntimeError::MissingProperty { property: name.clone(),
                                                                     line })
        },
        _ => Err(RuntimeError::MissingProperty { property: name.clone(),
                                                 line }),
    }
}

/// Reads a computed member from an object or array.
fn read_computed(target: &Value, key: &Value, line: usize) -> EvalResult<Value> {
    match (target, key) {
        (Value::Object(properties), Value::Str(name)) => {
            Ok(properties.borrow().get(name).cloned().unwrap_or(Value::Null))
        },
        (Value::Array(elements), Value::Number(index)) => {
            let value = f64_to_index(*index).and_then(|i| elements.borrow().get(i).cloned());
            Ok(value.unwrap_or(Value::Null))
        },
        (Value::Object(..), other) => {
            Err(RuntimeError::type_error(format!("object keys are strings, found {}",
                                                 other.type_name()),
                                         line))
        },
        (Value::Array(..), other) => {
            Err(RuntimeError::type_error(format!("array indices are numbers, found {}",
                                                 other.type_name()),
                                         line))
        },
        (_, key) => Err(RuntimeError::MissingProperty { property: key.to_string(),
                                                        line }),
    }
}

/// Evaluates a member write, either `object.name = v` or `object[expr] = v`.
///
/// Writes only overwrite existing slots. Assigning to an absent property or
/// an out-of-range index is a silent no-op that yields null; a successful
/// write yields the written value.
///
/// # Parameters
/// - `object`: The expression whose member is written.
/// - `property`: The property identifier or the computed key expression.
/// - `computed`: Whether the access is the `object[expr]` form.
/// - `value`: The value to write.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Errors
/// - `MissingProperty` for a write to a value that is neither an object nor
///   an array.
/// - A type error if the key type does not match the target, or an array
///   index is negative or fractional.
/// - Propagates errors from the object and key expressions.
pub fn assign_member(object: &Expr,
                     property: &Expr,
                     computed: bool,
                     value: Value,
                     line: usize,
                     env: &ScopeRef)
                     -> EvalResult<Value> {
    let target = evaluate_expr(object, env)?;
    if computed {
        let key = evaluate_expr(property, env)?;
        return write_computed(&target, &key, value, line);
    }

    let Expr::Identifier { name, .. } = property else {
        return Err(RuntimeError::type_error("property name must be an identifier", line));
    };
    match &target {
        Value::Object(properties) => {
            if properties.borrow_mut().set_existing(name, value.clone()) {
                Ok(value)
            } else {
                Ok(Value::Null)
            }
        },
        _ => Err(RuntimeError::MissingProperty { property: name.clone(),
                                                 line }),
    }
}

/// Writes a computed member of an object or array.
fn write_computed(target: &Value, key: &Value, value: Value, line: usize) -> EvalResult<Value> {
    match (target, key) {
        (Value::Object(properties), Value::Str(name)) => {
            if properties.borrow_mut().set_existing(name, value.clone()) {
                Ok(value)
            } else {
                Ok(Value::Null)
            }
        },
        (Value::Array(elements), Value::Number(index)) => {
            let index = f64_to_index(*index).ok_or_else(|| {
                           RuntimeError::type_error(format!("array index must be a non-negative integer, found {index}"),
                                                    line)
                       })?;
            let mut elements = elements.borrow_mut();
            if index < elements.len() {
                elements[index] = value.clone();
                Ok(value)
            } else {
                Ok(Value::Null)
            }
        },
        (Value::Object(..), other) => {
            Err(RuntimeError::type_error(format!("object keys are strings, found {}",
                                                 other.type_name()),
                                         line))
        },
        (Value::Array(..), other) => {
            Err(RuntimeError::type_error(format!("array indices are numbers, found {}",
                                                 other.type_name()),
                                         line))
        },
        (_, key) => Err(RuntimeError::MissingProperty { property: key.to_string(),
                                                        line }),
    }
}
