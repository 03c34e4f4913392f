use std::cmp::Ordering;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// `2^63`, the first float above every `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Converts an `i64` to the nearest `f64`.
///
/// Integers beyond `2^53` round to the nearest representable float, the same
/// way any other float operation rounds.
///
/// ## Example
/// ```
/// use gamer::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(10_000_000_000_000_000), 1e16);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Compares an integer with a float exactly, without rounding the integer.
///
/// NaN orders above every integer, matching `OrderedFloat`.
///
/// ## Example
/// ```
/// use std::cmp::Ordering;
///
/// use gamer::util::num::cmp_i64_f64;
///
/// // 2^53 + 1 rounds to 2^53 as a float, but still compares greater.
/// assert_eq!(cmp_i64_f64(9_007_199_254_740_993, 9_007_199_254_740_992.0), Ordering::Greater);
/// assert_eq!(cmp_i64_f64(2, 2.0), Ordering::Equal);
/// assert_eq!(cmp_i64_f64(-1, -0.5), Ordering::Less);
/// assert_eq!(cmp_i64_f64(i64::MAX, 9.3e18), Ordering::Less);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn cmp_i64_f64(int: i64, real: f64) -> Ordering {
    if real.is_nan() || real >= TWO_POW_63 {
        return Ordering::Less;
    }
    if real < -TWO_POW_63 {
        return Ordering::Greater;
    }

    let whole = real.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => whole.total_cmp(&real),
        ord => ord,
    }
}

/// Converts a non-negative `i64` exponent to `u32`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value is negative or above
/// `u32::MAX`.
///
/// ## Example
/// ```
/// use gamer::{error::RuntimeError, util::num::i64_to_u32_checked};
///
/// assert_eq!(i64_to_u32_checked(45).unwrap(), 45);
/// assert_eq!(i64_to_u32_checked(i64::MAX).unwrap_err(), RuntimeError::Overflow);
/// ```
pub fn i64_to_u32_checked(value: i64) -> EvalResult<u32> {
    u32::try_from(value).map_err(|_| RuntimeError::Overflow)
}

/// Fails with `RuntimeError::NonFiniteResult` for infinities and NaN.
///
/// ## Example
/// ```
/// use gamer::util::num::finite;
///
/// assert_eq!(finite(2.5).unwrap(), 2.5);
/// assert!(finite(f64::INFINITY).is_err());
/// assert!(finite(f64::NAN).is_err());
/// ```
pub fn finite(value: f64) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RuntimeError::NonFiniteResult)
    }
}
