use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::{finite, i64_to_u32_checked},
};

/// Evaluates an arithmetic operation on two values.
///
/// Both operands must be numeric. Addition, subtraction and multiplication of
/// two integers stay integral and are overflow-checked; any float operand
/// promotes the operation to floating point. Division always produces a
/// float. The zero divisor is checked here too, independently of the semantic
/// validator.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand (the base for `Power`).
/// - `right`: Right operand (the exponent for `Power`).
///
/// # Returns
/// An `EvalResult<Value>` containing the computed value.
///
/// # Example
/// ```
/// use gamer::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(100), &Value::Integer(50));
/// assert_eq!(sum.unwrap(), Value::Integer(150));
///
/// let quotient = eval_binary(BinaryOperator::Divide, &Value::Integer(100), &Value::Integer(4));
/// assert_eq!(quotient.unwrap(), Value::Float(25.0));
/// ```
pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    left.check_numeric()?;
    right.check_numeric()?;

    match op {
        BinaryOperator::Add => eval_scalar_op(left, right, i64::checked_add, |a, b| a + b),
        BinaryOperator::Subtract => eval_scalar_op(left, right, i64::checked_sub, |a, b| a - b),
        BinaryOperator::Multiply => eval_scalar_op(left, right, i64::checked_mul, |a, b| a * b),
        BinaryOperator::Divide => eval_div(left, right),
        BinaryOperator::Power => eval_pow(left, right),
    }
}

/// Applies `integer` to two integers and `real` to every other pair.
fn eval_scalar_op(left: &Value,
                  right: &Value,
                  integer: fn(i64, i64) -> Option<i64>,
                  real: fn(f64, f64) -> f64)
                  -> EvalResult<Value> {
    if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
        return integer(*a, *b).map(Value::Integer).ok_or(RuntimeError::Overflow);
    }

    finite(real(left.as_real()?, right.as_real()?)).map(Value::Float)
}

/// Divides as floating point, rejecting the exact zero divisor.
fn eval_div(left: &Value, right: &Value) -> EvalResult<Value> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero);
    }

    finite(left.as_real()? / right.as_real()?).map(Value::Float)
}

/// Evaluates an exponentiation operation.
///
/// An integer base with a non-negative integer exponent uses checked integer
/// exponentiation. Every other case is computed with `powf`. Zero raised to a
/// negative power is a division by zero.
fn eval_pow(base: &Value, exponent: &Value) -> EvalResult<Value> {
    if let (Value::Integer(b), Value::Integer(e)) = (base, exponent)
       && let Ok(e) = i64_to_u32_checked(*e)
    {
        return b.checked_pow(e).map(Value::Integer).ok_or(RuntimeError::Overflow);
    }

    if base.is_zero() && exponent.is_negative() {
        return Err(RuntimeError::DivisionByZero);
    }

    finite(base.as_real()?.powf(exponent.as_real()?)).map(Value::Float)
}
