use chrono::Utc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::core::EvalResult,
        natives::core::number_arg,
        value::core::Value,
    },
    util::num::usize_to_f64_checked,
};

/// `len(value)`: the length of an array, string, or object.
///
/// Arrays count elements, strings count characters, objects count
/// properties.
pub fn len(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    let length = match args.first() {
        Some(Value::Array(elements)) => elements.borrow().len(),
        Some(Value::Str(text)) => text.chars().count(),
        Some(Value::Object(properties)) => properties.borrow().len(),
        Some(other) => {
            return Err(RuntimeError::type_error(format!("len expects an array, string or object, found {}",
                                                        other.type_name()),
                                                line));
        },
        None => return Err(RuntimeError::type_error("len is missing its argument", line)),
    };
    Ok(Value::Number(usize_to_f64_checked(length, line)?))
}

/// `copy(value)`: a shallow copy of an array or object.
///
/// The copy shares no top-level storage with the original, but nested
/// objects and arrays are still aliased. Every other value is returned
/// unchanged, since those copy on assignment anyway.
pub fn copy(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    match args.first() {
        Some(Value::Array(elements)) => Ok(Value::from(elements.borrow().clone())),
        Some(Value::Object(properties)) => Ok(Value::from(properties.borrow().clone())),
        Some(other) => Ok(other.clone()),
        None => Err(RuntimeError::type_error("copy is missing its argument", line)),
    }
}

/// `range(..)`: an array of numbers.
///
/// Accepts `range(end)`, `range(start, end)`, or `range(start, end, step)`.
/// The range starts at `start` (default 0), stops before `end`, and advances
/// by `step` (default 1). A negative step counts down.
pub fn range(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    let (start, end, step) = match args.len() {
        1 => (0.0, number_arg(args, 0, "range", line)?, 1.0),
        2 => (number_arg(args, 0, "range", line)?,
              number_arg(args, 1, "range", line)?,
              1.0),
        3 => (number_arg(args, 0, "range", line)?,
              number_arg(args, 1, "range", line)?,
              number_arg(args, 2, "range", line)?),
        count => {
            return Err(RuntimeError::type_error(format!("range expects 1 to 3 arguments, found {count}"),
                                                line));
        },
    };
    if step == 0.0 || !step.is_finite() {
        return Err(RuntimeError::type_error("range step must be a non-zero finite number", line));
    }

    let mut values = Vec::new();
    let mut current = start;
    while (step > 0.0 && current < end) || (step < 0.0 && current > end) {
        values.push(Value::Number(current));
        current += step;
    }
    Ok(Value::from(values))
}

/// `String(value)`: the value's display form as a string.
pub fn to_string(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    match args.first() {
        Some(value) => Ok(Value::Str(value.to_string())),
        None => Err(RuntimeError::type_error("String is missing its argument", line)),
    }
}

/// `Number(value)`: converts a value to a number.
///
/// Strings parse as decimal literals, booleans convert to 1 and 0, numbers
/// pass through. Anything else, including an unparsable string, yields null.
pub fn to_number(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    match args.first() {
        Some(Value::Number(n)) => Ok(Value::Number(*n)),
        Some(Value::Str(text)) => {
            Ok(text.trim()
                   .parse::<f64>()
                   .map_or(Value::Null, Value::Number))
        },
        Some(Value::Bool(b)) => Ok(Value::Number(if *b { 1.0 } else { 0.0 })),
        Some(_) => Ok(Value::Null),
        None => Err(RuntimeError::type_error("Number is missing its argument", line)),
    }
}

/// `date()`: the current time as milliseconds since the Unix epoch.
#[allow(clippy::cast_precision_loss)]
pub fn date(_args: &[Value], _env: &ScopeRef, _line: usize) -> EvalResult<Value> {
    Ok(Value::Number(Utc::now().timestamp_millis() as f64))
}
