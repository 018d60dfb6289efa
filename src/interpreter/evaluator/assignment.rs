use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::ScopeRef,
        evaluator::{
            binary::apply_binary,
            core::{EvalResult, evaluate_expr},
            member,
        },
        value::core::Value,
    },
};

/// Evaluates a plain or compound assignment expression.
///
/// The assignee must be an identifier or a member expression. Compound
/// assignments read the current value, combine it with the right-hand side,
/// and write the result back through the same target.
///
/// # Parameters
/// - `assignee`: The assignment target expression.
/// - `op`: The compound operator, or `None` for plain `=`.
/// - `value`: The right-hand side expression.
/// - `line`: Source line for error reporting.
/// - `env`: The environment to evaluate against.
///
/// # Returns
/// The assigned value.
///
/// # Errors
/// - `InvalidAssignmentTarget` if the assignee is neither an identifier nor
///   a member expression.
/// - `ConstReassignment` when assigning to a constant.
/// - A type error if a compound operator's type rules are violated.
/// - Propagates errors from the target and the right-hand side.
pub fn evaluate_assignment(assignee: &Expr,
                           op: Option<BinaryOperator>,
                           value: &Expr,
                           line: usize,
                           env: &ScopeRef)
                           -> EvalResult<Value> {
    match assignee {
        Expr::Identifier { name, .. } => {
            let new_value = match op {
                Some(op) => {
                    let current = env.lookup(name, line)?;
                    let rhs = evaluate_expr(value, env)?;
                    apply_compound(op, &current, &rhs, line)?
                },
                None => evaluate_expr(value, env)?,
            };
            env.assign(name, new_value, line)
        },
        Expr::MemberExp { object,
                          property,
                          computed,
                          line: member_line, } => {
            let new_value = match op {
                Some(op) => {
                    let current =
                        member::evaluate_member(object, property, *computed, *member_line, env)?;
                    let rhs = evaluate_expr(value, env)?;
                    apply_compound(op, &current, &rhs, line)?
                },
                None => evaluate_expr(value, env)?,
            };
            member::assign_member(object, property, *computed, new_value, *member_line, env)
        },
        _ => Err(RuntimeError::InvalidAssignmentTarget { line }),
    }
}

/// Applies a compound assignment operator to the current and new values.
///
/// Unlike plain binary operators, the compound forms are strict: `+=`
/// accepts two numbers or two strings, every other operator accepts numbers
/// only, and anything else is a type error rather than null.
fn apply_compound(op: BinaryOperator,
                  current: &Value,
                  rhs: &Value,
                  line: usize)
                  -> EvalResult<Value> {
    let allowed = match (current, rhs) {
        (Value::Number(..), Value::Number(..)) => true,
        (Value::Str(..), Value::Str(..)) => op == BinaryOperator::Add,
        _ => false,
    };
    if !allowed {
        return Err(RuntimeError::type_error(format!("cannot apply '{op}=' to {} and {}",
                                                    current.type_name(),
                                                    rhs.type_name()),
                                            line));
    }
    Ok(apply_binary(op, current, rhs))
}
