use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    ast::Literal,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{cmp_i64_f64, i64_to_f64},
};

/// Represents a runtime value stored in the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// Opaque text. Can be printed, never used in arithmetic.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A literal that cannot be represented as a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralOutOfRange {
    /// The literal as written.
    pub lexeme: String,
}

impl Value {
    /// Builds the value of a literal.
    ///
    /// Number literals become integers, decimal literals floats and text
    /// literals text; the literal kind alone decides the value kind.
    ///
    /// # Errors
    /// Returns `LiteralOutOfRange` if an integer literal does not fit in `i64`
    /// or a decimal literal is not finite.
    ///
    /// # Example
    /// ```
    /// use gamer::{ast::Literal, interpreter::value::Value};
    ///
    /// let v = Value::from_literal(&Literal::Decimal("2.5".to_string()));
    /// assert_eq!(v, Ok(Value::Float(2.5)));
    ///
    /// let v = Value::from_literal(&Literal::Number("99999999999999999999".to_string()));
    /// assert!(v.is_err());
    /// ```
    pub fn from_literal(literal: &Literal) -> Result<Self, LiteralOutOfRange> {
        let out_of_range = |lexeme: &str| LiteralOutOfRange { lexeme: lexeme.to_string() };

        match literal {
            Literal::Number(lexeme) => {
                lexeme.parse::<i64>().map(Self::Integer).map_err(|_| out_of_range(lexeme))
            },
            Literal::Decimal(lexeme) => lexeme.parse::<f64>()
                                              .ok()
                                              .filter(|f| f.is_finite())
                                              .map(Self::Float)
                                              .ok_or_else(|| out_of_range(lexeme)),
            Literal::Text(text) => Ok(Self::Text(text.clone())),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Integers beyond `2^53` round to the nearest float.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is an integer or a float.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is text.
    pub fn as_real(&self) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            Self::Text(_) => Err(self.not_a_number()),
        }
    }

    /// Fails with `ExpectedNumber` unless the value is an integer or a float.
    pub fn check_numeric(&self) -> EvalResult<()> {
        if self.is_numeric() {
            Ok(())
        } else {
            Err(self.not_a_number())
        }
    }

    /// Builds the error reported when this value reaches arithmetic.
    fn not_a_number(&self) -> RuntimeError {
        RuntimeError::ExpectedNumber { found: self.to_string() }
    }

    /// Returns the absolute value, keeping the numeric kind.
    ///
    /// # Returns
    /// - `Ok(Value)`: The absolute value.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is text.
    /// - `Err(RuntimeError::Overflow)`: For `i64::MIN`.
    pub fn abs(&self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => n.checked_abs().map(Self::Integer).ok_or(RuntimeError::Overflow),
            Self::Float(r) => Ok(Self::Float(r.abs())),
            Self::Text(_) => Err(self.not_a_number()),
        }
    }

    /// Compares two numeric values.
    ///
    /// Every pair compares exactly: an integer is never rounded to compare it
    /// with a float. Two floats compare under a total order.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use gamer::interpreter::value::Value;
    ///
    /// let ord = Value::Integer(3).numeric_cmp(&Value::Float(2.5)).unwrap();
    /// assert_eq!(ord, Ordering::Greater);
    ///
    /// assert!(Value::Integer(3).numeric_cmp(&Value::from("tres")).is_err());
    /// ```
    pub fn numeric_cmp(&self, other: &Self) -> EvalResult<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Ok(a.cmp(b)),
            (Self::Integer(a), Self::Float(b)) => Ok(cmp_i64_f64(*a, *b)),
            (Self::Float(a), Self::Integer(b)) => Ok(cmp_i64_f64(*b, *a).reverse()),
            (Self::Float(a), Self::Float(b)) => Ok(OrderedFloat(*a).cmp(&OrderedFloat(*b))),
            (Self::Text(_), _) => Err(self.not_a_number()),
            (_, Self::Text(_)) => Err(other.not_a_number()),
        }
    }

    /// Returns `true` for the exact zero of either numeric kind.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(r) => *r == 0.0,
            Self::Text(_) => false,
        }
    }

    /// Returns `true` for numeric values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(n) => *n < 0,
            Self::Float(r) => *r < 0.0,
            Self::Text(_) => false,
        }
    }

    /// Returns `true` if the value is [`Value::Integer`] or [`Value::Float`].
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Float(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so `25.0` never reads as an integer.
            Self::Float(r) => write!(f, "{r:?}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
