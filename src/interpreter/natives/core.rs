use crate::{
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeRef},
        evaluator::core::EvalResult,
        natives::{convert, io, math},
        value::core::{NativeFn, NativeFunction, Value},
    },
};

/// The free-standing natives installed in every global scope.
const NATIVES: &[(&str, NativeFn)] = &[("println", io::println),
                                       ("print", io::print),
                                       ("inspect", io::inspect),
                                       ("len", convert::len),
                                       ("copy", convert::copy),
                                       ("range", convert::range),
                                       ("String", convert::to_string),
                                       ("Number", convert::to_number),
                                       ("date", convert::date)];

/// Creates the global scope every program is evaluated against.
///
/// The scope binds the `null`, `true`, and `false` constants, the natives
/// from [`NATIVES`], and the `Math` object. All bindings are constants; user
/// code can shadow them in child scopes but never reassign them.
///
/// # Example
/// ```
/// use rill::interpreter::natives::core::create_global_scope;
///
/// let env = create_global_scope();
/// assert!(env.lookup("true", 0).is_ok());
/// assert!(env.lookup("println", 0).is_ok());
/// ```
#[must_use]
pub fn create_global_scope() -> ScopeRef {
    let env = Environment::new();

    env.define("null", Value::Null, true);
    env.define("true", Value::Bool(true), true);
    env.define("false", Value::Bool(false), true);

    for &(name, func) in NATIVES {
        env.define(name, Value::NativeFunction(NativeFunction { name, func }), true);
    }
    env.define("Math", math::math_object(), true);

    env
}

/// Extracts the numeric argument at `index`, or reports which argument of
/// which native was wrong.
pub(in crate::interpreter::natives) fn number_arg(args: &[Value],
                                                 index: usize,
                                                 native: &str,
                                                 line: usize)
                                                 -> EvalResult<f64> {
    match args.get(index) {
        Some(Value::Number(n)) => Ok(*n),
        Some(other) => {
            Err(RuntimeError::type_error(format!("{native} expects number arguments, found {}",
                                                 other.type_name()),
                                         line))
        },
        None => Err(RuntimeError::type_error(format!("{native} is missing argument {}", index + 1),
                                             line)),
    }
}
