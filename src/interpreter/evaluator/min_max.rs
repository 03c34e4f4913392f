use std::cmp::Ordering;

use crate::{
    ast::Extremum,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Selects the largest or the smallest of a list of numeric values.
///
/// Values are compared numerically across kinds, and the selected value keeps
/// its own kind. When several values tie, the first one in the list wins.
///
/// # Parameters
/// - `op`: Which end to select.
/// - `values`: One or more values.
///
/// # Returns
/// A copy of the selected value.
///
/// # Errors
/// - `MissingOperand` if `values` is empty. Parsed instructions always carry
///   at least one name, so this only guards direct calls.
/// - `ExpectedNumber` if any value is text.
///
/// # Example
/// ```
/// use gamer::{
///     ast::Extremum,
///     interpreter::{evaluator::min_max::min_max, value::Value},
/// };
///
/// let values = [Value::Integer(10), Value::Float(20.5), Value::Integer(5)];
///
/// assert_eq!(min_max(Extremum::Maximum, &values).unwrap(), Value::Float(20.5));
/// assert_eq!(min_max(Extremum::Minimum, &values).unwrap(), Value::Integer(5));
/// ```
pub fn min_max(op: Extremum, values: &[Value]) -> EvalResult<Value> {
    let (first, rest) = values.split_first().ok_or(RuntimeError::MissingOperand)?;
    first.check_numeric()?;

    let wanted = match op {
        Extremum::Maximum => Ordering::Greater,
        Extremum::Minimum => Ordering::Less,
    };

    let mut best = first;
    for value in rest {
        if value.numeric_cmp(best)? == wanted {
            best = value;
        }
    }

    Ok(best.clone())
}
