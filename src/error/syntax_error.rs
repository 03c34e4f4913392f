#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while checking the shape of a line.
pub enum SyntaxError {
    /// The line produced no tokens.
    Empty,
    /// The first token is not a known instruction keyword.
    UnknownInstruction {
        /// The first lexeme of the line.
        lexeme: String,
    },
    /// The operands do not match the instruction's template.
    InvalidSyntax {
        /// The instruction keyword as written in the line.
        keyword: String,
        /// The expected shape, e.g. `crear <identifier> = <value>`.
        usage:   String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "No tokens to analyze."),
            Self::UnknownInstruction { lexeme } => {
                write!(f, "Instruction not recognized: '{lexeme}'.")
            },
            Self::InvalidSyntax { keyword, usage } => {
                write!(f, "Invalid syntax for '{keyword}'. Expected: {usage}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
