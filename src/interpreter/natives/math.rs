use crate::{
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::core::EvalResult,
        natives::core::number_arg,
        value::{
            core::{NativeFn, NativeFunction, Value},
            object::ObjectMap,
        },
    },
};

/// Builds the `Math` object installed in the global scope.
///
/// `Math` is an ordinary object whose properties are native functions, so
/// scripts reach them through plain member access (`Math.floor(x)`).
#[must_use]
pub fn math_object() -> Value {
    const FUNCTIONS: &[(&str, NativeFn)] = &[("pow", pow),
                                             ("abs", abs),
                                             ("max", max),
                                             ("min", min),
                                             ("floor", floor),
                                             ("random", random),
                                             ("sin", sin),
                                             ("cos", cos),
                                             ("tan", tan),
                                             ("sqrt", sqrt)];

    let map: ObjectMap =
        FUNCTIONS.iter()
                 .map(|&(name, func)| {
                     (name.to_string(), Value::NativeFunction(NativeFunction { name, func }))
                 })
                 .collect();
    Value::from(map)
}

/// `Math.pow(base, exponent)`: raises `base` to `exponent`.
pub fn pow(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    let base = number_arg(args, 0, "Math.pow", line)?;
    let exponent = number_arg(args, 1, "Math.pow", line)?;
    Ok(Value::Number(base.powf(exponent)))
}

/// `Math.abs(x)`: absolute value.
pub fn abs(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.abs", line)?.abs()))
}

/// `Math.max(..)`: the largest of one or more numbers.
pub fn max(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    fold_numbers(args, "Math.max", f64::max, line)
}

/// `Math.min(..)`: the smallest of one or more numbers.
pub fn min(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    fold_numbers(args, "Math.min", f64::min, line)
}

/// `Math.floor(x)`: rounds down to the nearest integer.
pub fn floor(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.floor", line)?.floor()))
}

/// `Math.random()`: a uniformly distributed number in `[0, 1)`.
pub fn random(_args: &[Value], _env: &ScopeRef, _line: usize) -> EvalResult<Value> {
    Ok(Value::Number(rand::random::<f64>()))
}

/// `Math.sin(x)`: sine, in radians.
pub fn sin(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.sin", line)?.sin()))
}

/// `Math.cos(x)`: cosine, in radians.
pub fn cos(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.cos", line)?.cos()))
}

/// `Math.tan(x)`: tangent, in radians.
pub fn tan(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.tan", line)?.tan()))
}

/// `Math.sqrt(x)`: square root; negative inputs yield NaN.
pub fn sqrt(args: &[Value], _env: &ScopeRef, line: usize) -> EvalResult<Value> {
    Ok(Value::Number(number_arg(args, 0, "Math.sqrt", line)?.sqrt()))
}

/// Folds one or more numeric arguments with `combine`.
fn fold_numbers(args: &[Value],
                native: &str,
                combine: fn(f64, f64) -> f64,
                line: usize)
                -> EvalResult<Value> {
    if args.is_empty() {
        return Err(RuntimeError::type_error(format!("{native} expects at least one argument"),
                                            line));
    }
    let mut result = number_arg(args, 0, native, line)?;
    for index in 1..args.len() {
        result = combine(result, number_arg(args, index, native, line)?);
    }
    Ok(Value::Number(result))
}
