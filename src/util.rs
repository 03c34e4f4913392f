/// Numeric conversion helpers.
///
/// Conversions between `i64`, `u32` and `f64`, an exact integer/float
/// comparison, and the finiteness check applied to every float result.
pub mod num;
