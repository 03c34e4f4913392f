use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Applies a single-operand operation.
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match op {
        UnaryOperator::SquareRoot => sqrt(value),
        UnaryOperator::Absolute => value.abs(),
    }
}

/// Computes the square root of a non-negative number.
///
/// Integers and floats both produce a float. Negative values are rejected
/// here as well, even though the semantic validator already refuses them.
///
/// # Errors
/// - `ExpectedNumber` for text.
/// - `NegativeRadicand` for values below zero.
///
/// # Example
/// ```
/// use gamer::interpreter::{evaluator::unary::sqrt, value::Value};
///
/// assert_eq!(sqrt(&Value::Integer(16)).unwrap(), Value::Float(4.0));
/// assert!(sqrt(&Value::Float(-4.0)).is_err());
/// ```
pub fn sqrt(value: &Value) -> EvalResult<Value> {
    value.check_numeric()?;

    if value.is_negative() {
        return Err(RuntimeError::NegativeRadicand);
    }

    Ok(Value::Float(value.as_real()?.sqrt()))
}
