#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An arithmetic operation received a non-numeric value.
    ExpectedNumber {
        /// The offending value, as displayed.
        found: String,
    },
    /// An instruction that needs operands received none.
    ///
    /// Lines cannot produce this: `jefe` and `esbirro` need at least one name
    /// to pass syntax validation. Only direct calls to
    /// [`min_max`](crate::interpreter::evaluator::min_max::min_max) can.
    MissingOperand,
    /// Attempted division by zero.
    DivisionByZero,
    /// Tried to take the square root of a negative value.
    NegativeRadicand,
    /// Integer arithmetic overflowed.
    Overflow,
    /// A decimal computation produced infinity or NaN.
    NonFiniteResult,
    /// An integer literal does not fit the integer range.
    LiteralTooLarge {
        /// The literal as written.
        lexeme: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::ExpectedNumber { found } => {
                write!(f, "Can only operate on numbers, found '{found}'.")
            },
            Self::MissingOperand => write!(f, "Instruction has no operands."),
            Self::DivisionByZero => write!(f, "Cannot divide by zero."),
            Self::NegativeRadicand => {
                write!(f, "Cannot take the square root of a negative number.")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::NonFiniteResult => write!(f, "Result is not a finite number."),
            Self::LiteralTooLarge { lexeme } => write!(f, "Literal {lexeme} is too large."),
        }
    }
}

impl std::error::Error for RuntimeError {}
