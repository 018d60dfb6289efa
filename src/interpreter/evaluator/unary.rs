use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        environment::ScopeRef,
        evaluator::core::{EvalResult, evaluate_expr},
        value::core::Value,
    },
};

/// Evaluates a unary expression.
///
/// Negation requires a number and logical NOT requires a boolean; any other
/// operand type is an error.
///
/// # Parameters
/// - `op`: The unary operator to apply.
/// - `target`: The operand expression.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Errors
/// - A type error if the operand's type does not match the operator.
/// - Propagates errors from evaluating the operand.
pub fn evaluate_unary(op: UnaryOperator,
                      target: &Expr,
                      line: usize,
                      env: &ScopeRef)
                      -> EvalResult<Value> {
    let value = evaluate_expr(target, env)?;
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
        UnaryOperator::Not => Ok(Value::Bool(!value.as_bool(line)?)),
    }
}
