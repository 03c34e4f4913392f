/// Instruction dispatch, operand resolution and result formatting.
///
/// Contains the main evaluation entry point and the [`core::Outcome`] type
/// whose `Display` is the text shown to the user.
pub mod core;

/// Arithmetic on two operands.
///
/// Implements addition, subtraction, multiplication, division and
/// exponentiation with integer/float promotion and overflow checks.
pub mod binary;

/// Square root and absolute value.
pub mod unary;

/// `jefe` and `esbirro`.
pub mod min_max;
