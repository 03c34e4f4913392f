#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while validating the meaning of an
/// instruction against the symbol table.
pub enum SemanticError {
    /// Tried to create a variable that already exists.
    AlreadyDefined {
        /// The name of the variable.
        name: String,
    },
    /// Referenced a variable that does not exist.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// The divisor of a division resolves to zero.
    DivisionByZero,
    /// Tried to take the square root of a negative variable.
    NegativeRadicand {
        /// The name of the variable.
        name: String,
    },
    /// An integer literal does not fit the integer range.
    LiteralOutOfRange {
        /// The literal as written.
        lexeme: String,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDefined { name } => write!(f, "Variable '{name}' is already defined."),
            Self::UnknownVariable { name } => write!(f, "Variable '{name}' is not defined."),
            Self::DivisionByZero => write!(f, "Cannot divide by zero."),
            Self::NegativeRadicand { name } => write!(f,
                                                      "Cannot take the square root of negative variable '{name}'."),
            Self::LiteralOutOfRange { lexeme } => {
                write!(f, "Integer literal {lexeme} is out of range.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
