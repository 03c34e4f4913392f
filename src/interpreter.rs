/// The evaluator module executes validated instructions.
///
/// The evaluator performs the effect of an instruction on the symbol table and
/// computes its outcome: arithmetic with integer/float promotion, square
/// roots, absolute values, extrema and printing.
///
/// # Responsibilities
/// - Executes every instruction kind.
/// - Re-checks division by zero, negative radicands and variable existence.
/// - Rejects text operands in arithmetic.
pub mod evaluator;
/// The lexer module tokenizes one line of text.
///
/// The lexer splits a line on whitespace, keeping quoted text together, and
/// classifies each lexeme as a keyword, identifier, number, decimal, string,
/// `=` or unknown. It is the first stage of interpretation and never fails.
pub mod lexer;
/// The parser module validates the shape of a token sequence.
///
/// The first token selects an instruction template; the remaining tokens must
/// match it exactly. A valid sequence becomes a typed
/// [`Instruction`](crate::ast::Instruction).
pub mod parser;
/// The semantic module validates instructions against the live variables.
///
/// # Responsibilities
/// - Rejects redefinitions and references to unknown variables.
/// - Rejects division by zero and square roots of negative values.
/// - Registers the variables created by `crear`.
pub mod semantic;
/// Interpreter sessions.
///
/// Ties the four stages together, owns the symbol table, and exposes the
/// public API for tokenizing, evaluating and inspecting a session.
pub mod session;
/// The symbol table of a session.
pub mod symbols;
/// The value module defines the runtime data types.
///
/// Values are integers, floats or text. This module provides numeric checks,
/// conversion to `f64`, cross-kind comparison and literal resolution.
pub mod value;
