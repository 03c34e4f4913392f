use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::{
    config::KeywordTable,
    error::{InterpreterError, SemanticError},
    interpreter::{
        evaluator::core::{Outcome, evaluate},
        lexer::{Token, tokenize},
        parser::parse_instruction,
        semantic,
        symbols::SymbolTable,
        value::Value,
    },
};

/// The result of one non-blank line of a script.
#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// 1-based line number in the script.
    pub line:   usize,
    /// The line, trimmed.
    pub source: String,
    /// The formatted outcome or the error of the line.
    pub result: Result<String, InterpreterError>,
}

/// One interpreter session.
///
/// Owns the symbol table and runs each line through the four stages:
/// tokenize, syntax validation, semantic validation and evaluation. A failing
/// line leaves the table exactly as it was before that line.
///
/// Sessions are independent: each one owns its own table, while the keyword
/// table can be shared between them.
///
/// ## Usage
/// ```
/// use gamer::interpreter::session::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.evaluate("crear vida = 100").unwrap();
/// interpreter.evaluate("crear pocion = 50").unwrap();
///
/// assert_eq!(interpreter.evaluate("curar vida pocion").unwrap(), "Result: 150");
/// assert_eq!(interpreter.evaluate("decir vida").unwrap(), "vida = 100");
/// assert!(interpreter.evaluate("crear vida = 200").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    keywords: Arc<KeywordTable>,
    symbols:  SymbolTable,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates a session with the standard keyword table and no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::with_keywords(Arc::new(KeywordTable::default()))
    }

    /// Creates a session that recognizes the keywords of `keywords`.
    #[must_use]
    pub fn with_keywords(keywords: Arc<KeywordTable>) -> Self {
        Self { keywords,
               symbols: SymbolTable::new() }
    }

    /// Splits a line into tokens using this session's keyword table.
    #[must_use]
    pub fn tokenize(&self, line: &str) -> Vec<Token> {
        tokenize(line, &self.keywords)
    }

    /// Runs one line through the pipeline and formats its outcome.
    ///
    /// # Errors
    /// Returns the error of the first stage that rejects the line.
    pub fn evaluate(&mut self, line: &str) -> Result<String, InterpreterError> {
        self.execute(line).map(|outcome| outcome.to_string())
    }

    /// Runs one line through the pipeline.
    ///
    /// # Errors
    /// - `InterpreterError::Syntax` for empty, unknown or malformed lines.
    /// - `InterpreterError::Semantic` for redefinitions, unknown variables and
    ///   domain violations.
    /// - `InterpreterError::Runtime` if evaluation fails after validation.
    #[instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, line: &str) -> Result<Outcome, InterpreterError> {
        let tokens = self.tokenize(line);
        debug!(count = tokens.len(), "tokenized");

        let instruction = parse_instruction(&tokens, &self.keywords)?;
        debug!(?instruction, "syntax valid");

        semantic::validate(&instruction, &mut self.symbols)?;
        debug!("semantics valid");

        let outcome = evaluate(&instruction, &mut self.symbols).map_err(|e| {
                          error!(error = %e, ?instruction, "evaluation failed after validation");
                          e
                      })?;
        debug!(%outcome, "evaluated");

        Ok(outcome)
    }

    /// Evaluates every non-blank line of `source`, continuing past failures.
    ///
    /// # Example
    /// ```
    /// use gamer::interpreter::session::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let reports = interpreter.run_script("crear a = 1\n\nfoo\ndecir a\n");
    ///
    /// assert_eq!(reports.len(), 3);
    /// assert_eq!(reports[1].line, 3);
    /// assert!(reports[1].result.is_err());
    /// assert_eq!(reports[2].result, Ok("a = 1".to_string()));
    /// ```
    pub fn run_script(&mut self, source: &str) -> Vec<LineReport> {
        source.lines()
              .enumerate()
              .filter(|(_, text)| !text.trim().is_empty())
              .map(|(index, text)| {
                  let text = text.trim();
                  LineReport { line:   index + 1,
                               source: text.to_string(),
                               result: self.evaluate(text), }
              })
              .collect()
    }

    /// Removes every variable.
    pub fn reset(&mut self) {
        debug!(variables = self.symbols.len(), "reset");
        self.symbols.clear();
    }

    /// Binds `name` to `value` directly, replacing any previous value.
    ///
    /// The name is stored as given. Lines only reach lower-case names, since
    /// the tokenizer lower-cases identifiers.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.symbols.insert(name, value.into());
    }

    /// Returns a copy of the value bound to `name`.
    ///
    /// # Errors
    /// Returns `SemanticError::UnknownVariable` if `name` is not bound.
    pub fn lookup(&self, name: &str) -> Result<Value, InterpreterError> {
        self.symbols
            .get(name)
            .cloned()
            .ok_or_else(|| SemanticError::UnknownVariable { name: name.to_string() }.into())
    }

    /// Returns the session's variables.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Returns the keyword table of the session.
    #[must_use]
    pub fn keywords(&self) -> &KeywordTable {
        &self.keywords
    }
}
