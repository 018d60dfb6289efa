use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::ScopeRef,
        evaluator::core::{EvalResult, evaluate_expr},
        value::core::Value,
    },
};

/// Evaluates a binary expression.
///
/// Both operands are always evaluated before the operator is applied, even
/// for `and` and `or`; the logical operators do not short-circuit.
///
/// # Parameters
/// - `left`: Left operand expression.
/// - `op`: The operator.
/// - `right`: Right operand expression.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Returns
/// The operation's result. Operands of mismatched types, or of a type the
/// operator does not cover, yield null rather than an error.
///
/// # Errors
/// Propagates errors from evaluating either operand.
pub fn evaluate_binary(left: &Expr,
                       op: BinaryOperator,
                       right: &Expr,
                       _line: usize,
                       env: &ScopeRef)
                       -> EvalResult<Value> {
    let lhs = evaluate_expr(left, env)?;
    let rhs = evaluate_expr(right, env)?;
    Ok(apply_binary(op, &lhs, &rhs))
}

/// Applies a binary operator to two already-evaluated values.
///
/// The type rules, in order:
/// - Mismatched type tags yield null for every operator.
/// - `==` and `!=` compare any two values of the same type structurally.
/// - `+` adds numbers and concatenates strings.
/// - The remaining arithmetic and relational operators cover numbers only.
/// - `and` and `or` cover booleans only.
///
/// Anything not covered yields null. Division and modulo follow IEEE 754, so
/// dividing by zero produces an infinity or NaN rather than an error.
pub fn apply_binary(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    if !lhs.is_same_kind(rhs) {
        return Value::Null;
    }

    match (op, lhs, rhs) {
        (BinaryOperator::Equal, ..) => Value::Bool(lhs == rhs),
        (BinaryOperator::NotEqual, ..) => Value::Bool(lhs != rhs),
        (BinaryOperator::Add, Value::Str(a), Value::Str(b)) => Value::Str(format!("{a}{b}")),
        (_, Value::Number(a), Value::Number(b)) => apply_numeric(op, *a, *b),
        (BinaryOperator::And, Value::Bool(a), Value::Bool(b)) => Value::Bool(*a && *b),
        (BinaryOperator::Or, Value::Bool(a), Value::Bool(b)) => Value::Bool(*a || *b),
        _ => Value::Null,
    }
}

/// Applies an operator to two numbers.
///
/// Relational operators produce booleans; the rest produce numbers. The
/// logical operators do not apply to numbers and yield null.
fn apply_numeric(op: BinaryOperator, a: f64, b: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Number(a + b),
        BinaryOperator::Sub => Value::Number(a - b),
        BinaryOperator::Mul => Value::Number(a * b),
        BinaryOperator::Div => Value::Number(a / b),
        BinaryOperator::Mod => Value::Number(a % b),
        BinaryOperator::Pow => Value::Number(a.powf(b)),
        BinaryOperator::Less => Value::Bool(a < b),
        BinaryOperator::Greater => Value::Bool(a > b),
        BinaryOperator::LessEqual => Value::Bool(a <= b),
        BinaryOperator::GreaterEqual => Value::Bool(a >= b),
        BinaryOperator::Equal => Value::Bool(a == b),
        BinaryOperator::NotEqual => Value::Bool(a != b),
        BinaryOperator::And | BinaryOperator::Or => Value::Null,
    }
}
