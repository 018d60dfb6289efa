use std::io::Write;

use crate::interpreter::{
    environment::ScopeRef,
    evaluator::core::EvalResult,
    value::core::Value,
};

/// `println(..)`: prints the arguments separated by spaces, then a newline.
///
/// Values print in their display form; strings print without quotes. Yields
/// null.
pub fn println(args: &[Value], _env: &ScopeRef, _line: usize) -> EvalResult<Value> {
    println!("{}", join_args(args));
    Ok(Value::Null)
}

/// `print(..)`: like `println` without the trailing newline.
///
/// Flushes stdout so partial lines appear immediately.
pub fn print(args: &[Value], _env: &ScopeRef, _line: usize) -> EvalResult<Value> {
    print!("{}", join_args(args));
    let _ = std::io::stdout().flush();
    Ok(Value::Null)
}

/// `inspect(..)`: prints the arguments' internal structure.
///
/// Unlike `println`, this shows the value representation itself, which
/// distinguishes strings from numbers and exposes nesting. Yields null.
pub fn inspect(args: &[Value], _env: &ScopeRef, _line: usize) -> EvalResult<Value> {
    for arg in args {
        println!("{arg:#?}");
    }
    Ok(Value::Null)
}

fn join_args(args: &[Value]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
