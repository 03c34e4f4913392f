/// Keyword table configuration errors.
///
/// Raised while loading a keyword table from its text form, before any
/// instruction is processed.
pub mod config_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing an instruction
/// that already passed both validators. Reaching one of these usually means a
/// non-numeric operand reached arithmetic or the validators and the evaluator
/// disagree about an instruction.
pub mod runtime_error;
/// Semantic errors.
///
/// Errors about the meaning of an instruction with respect to the live
/// variables: redefinitions, unknown variables and domain violations such as
/// division by zero.
pub mod semantic_error;
/// Syntax errors.
///
/// Errors about the shape of a token sequence: unknown instructions and wrong
/// operand counts or kinds.
pub mod syntax_error;

pub use config_error::ConfigError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;
pub use syntax_error::SyntaxError;

/// The pipeline stage that rejected a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Token shape validation.
    Syntax,
    /// Symbol table and domain validation.
    Semantic,
    /// Execution of the instruction.
    Evaluation,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
            Self::Semantic => write!(f, "semantic"),
            Self::Evaluation => write!(f, "evaluation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The single error channel surfaced to callers for one line.
///
/// Each variant wraps the error of the stage that produced it, so callers can
/// report the message as-is or branch on [`InterpreterError::stage`].
pub enum InterpreterError {
    /// The line failed syntax validation.
    Syntax(SyntaxError),
    /// The line failed semantic validation.
    Semantic(SemanticError),
    /// The line failed during evaluation.
    Runtime(RuntimeError),
}

impl InterpreterError {
    /// Returns the stage that produced this error.
    ///
    /// # Example
    /// ```
    /// use gamer::{error::Stage, interpreter::session::Interpreter};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let err = interpreter.evaluate("foo bar baz").unwrap_err();
    ///
    /// assert_eq!(err.stage(), Stage::Syntax);
    /// ```
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Syntax(_) => Stage::Syntax,
            Self::Semantic(_) => Stage::Semantic,
            Self::Runtime(_) => Stage::Evaluation,
        }
    }
}

impl From<SyntaxError> for InterpreterError {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<SemanticError> for InterpreterError {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Semantic(e) => write!(f, "Semantic error: {e}"),
            Self::Runtime(e) => write!(f, "Evaluation error: {e}"),
        }
    }
}

impl std::error::Error for InterpreterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
