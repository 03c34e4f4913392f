use crate::interpreter::lexer::{Token, TokenKind};

/// A literal classified by the tokenizer, kept as written until it is
/// resolved to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer literal such as `-4`.
    Number(String),
    /// Decimal literal such as `3.14`.
    Decimal(String),
    /// Text literal without its quotes.
    Text(String),
}

/// A value position of an instruction: either a variable reference or a
/// literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Reference to a variable by name.
    Variable(String),
    /// A literal value.
    Literal(Literal),
}

impl Operand {
    /// Builds an operand from a token of a value kind.
    ///
    /// Returns `None` for keywords, `=` and unknown tokens.
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        let lexeme = token.lexeme.clone();

        match token.kind {
            TokenKind::Identifier => Some(Self::Variable(lexeme)),
            TokenKind::Number => Some(Self::Literal(Literal::Number(lexeme))),
            TokenKind::Decimal => Some(Self::Literal(Literal::Decimal(lexeme))),
            TokenKind::String => Some(Self::Literal(Literal::Text(lexeme))),
            TokenKind::Keyword | TokenKind::Equals | TokenKind::Unknown => None,
        }
    }

    /// Shorthand for a variable operand.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Shorthand for an integer literal operand.
    #[must_use]
    pub fn number(lexeme: impl Into<String>) -> Self {
        Self::Literal(Literal::Number(lexeme.into()))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(s) | Self::Decimal(s) => write!(f, "{s}"),
            Self::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

/// Arithmetic operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `curar`
    Add,
    /// `golpear`
    Subtract,
    /// `multiplicar`
    Multiply,
    /// `dividir`
    Divide,
    /// `poder`
    Power,
}

/// Operations on a single variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `revivir`
    SquareRoot,
    /// `xp`
    Absolute,
}

/// Selects the largest or the smallest of a list of variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// `jefe`
    Maximum,
    /// `esbirro`
    Minimum,
}

/// A syntactically valid instruction.
///
/// Produced by the syntax validator and consumed by the semantic validator and
/// the evaluator. Each variant carries exactly the operands its template
/// allows, so the later stages never index into a token list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Creates a new variable.
    Define {
        /// Name of the variable being created.
        name:  String,
        /// Right-hand side of `=`.
        value: Operand,
    },
    /// Arithmetic on two operands.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Operand,
        /// Right operand.
        right: Operand,
    },
    /// An operation on one variable.
    Unary {
        /// The operator.
        op:   UnaryOperator,
        /// Name of the variable.
        name: String,
    },
    /// Largest or smallest of one or more variables.
    Extremum {
        /// Which end to select.
        op:    Extremum,
        /// Names of the variables, in source order.
        names: Vec<String>,
    },
    /// Shows the value of a variable.
    Print {
        /// Name of the variable.
        name: String,
    },
}
