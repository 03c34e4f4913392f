//! # gamer
//!
//! gamer is an interpreter for the Gamer instruction language, a small
//! line-oriented language with a fixed, game-flavored vocabulary. Every line is
//! one instruction on named variables: `crear vida = 100`, `curar vida pocion`,
//! `jefe a b c`, `decir vida`.
//!
//! Each line passes through four stages: tokenizer, syntax validator, semantic
//! validator and evaluator. It yields either a result text or an error tagged
//! with the stage that rejected it.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::InterpreterError, interpreter::session::Interpreter};

/// Defines the typed form of a validated instruction.
///
/// The syntax validator turns a token sequence into an `Instruction`; the
/// semantic validator and the evaluator match on it exhaustively instead of
/// inspecting tokens again.
pub mod ast;
/// Keyword table configuration.
///
/// Declares the `Action` enum and the `KeywordTable` that maps surface
/// keywords such as `crear` to actions. The standard Spanish vocabulary is the
/// default; alternative tables can be parsed from text.
pub mod config;
/// Provides error types for every stage.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage plus keyword table loading.
/// - Combines the stage errors into `InterpreterError`, the single error
///   channel reported per line.
pub mod error;
/// Orchestrates the processing of instruction lines.
///
/// This module ties together lexing, syntax and semantic validation,
/// evaluation, values and the symbol table, and exposes the session API.
pub mod interpreter;
/// Numeric conversion helpers used by the evaluator.
pub mod util;

/// Evaluates every non-blank line of a script in a fresh session.
///
/// Stops at the first failing line.
///
/// # Errors
/// Returns the error of the first line that fails.
///
/// # Examples
/// ```
/// use gamer::get_results;
///
/// let results = get_results("crear oro = 100\ncrear cofres = 4\ndividir oro cofres").unwrap();
/// assert_eq!(results.last().unwrap(), "Result: 25.0");
///
/// // `mana` was never created.
/// assert!(get_results("decir mana").is_err());
/// ```
pub fn get_results(source: &str) -> Result<Vec<String>, InterpreterError> {
    let mut interpreter = Interpreter::new();

    source.lines()
          .map(str::trim)
          .filter(|line| !line.is_empty())
          .map(|line| interpreter.evaluate(line))
          .collect()
}
