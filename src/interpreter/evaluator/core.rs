use crate::{
    ast::{Instruction, Operand},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, min_max::min_max, unary::eval_unary},
        symbols::SymbolTable,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The observable effect of one evaluated instruction.
///
/// Its `Display` is the text reported for the line. The three variants print
/// distinctly, and none of them can be mistaken for an error message.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A `crear` stored a new variable.
    Defined {
        /// Name of the new variable.
        name:  String,
        /// Its value.
        value: Value,
    },
    /// An arithmetic or extremum instruction computed a value.
    Computed(Value),
    /// A `decir` read a variable.
    Printed {
        /// Name of the variable.
        name:  String,
        /// Its value.
        value: Value,
    },
}

impl Outcome {
    /// Returns the value carried by the outcome.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Defined { value, .. } | Self::Printed { value, .. } | Self::Computed(value) => value,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Defined { name, value } => {
                write!(f, "Variable '{name}' defined with value {value}")
            },
            Self::Computed(value) => write!(f, "Result: {value}"),
            Self::Printed { name, value } => write!(f, "{name} = {value}"),
        }
    }
}

/// Executes a validated instruction.
///
/// `crear` stores its variable in `symbols`; every other instruction only
/// reads the table. Variables and literals are resolved again here rather
/// than trusted from the validators, so a validator/evaluator mismatch
/// surfaces as a `RuntimeError` instead of a panic.
///
/// # Parameters
/// - `instruction`: An instruction that passed syntax and semantic
///   validation.
/// - `symbols`: The session's variables.
///
/// # Returns
/// The outcome of the instruction.
///
/// # Example
/// ```
/// use gamer::{
///     ast::{BinaryOperator, Instruction, Operand},
///     interpreter::{evaluator::core::evaluate, symbols::SymbolTable, value::Value},
/// };
///
/// let mut symbols = SymbolTable::new();
/// symbols.insert("a", Value::Integer(10));
///
/// let product = Instruction::Binary { op:    BinaryOperator::Multiply,
///                                     left:  Operand::number("4"),
///                                     right: Operand::variable("a"), };
///
/// assert_eq!(evaluate(&product, &mut symbols).unwrap().to_string(), "Result: 40");
/// ```
pub fn evaluate(instruction: &Instruction, symbols: &mut SymbolTable) -> EvalResult<Outcome> {
    match instruction {
        Instruction::Define { name, value } => {
            let value = resolve(value, symbols)?;
            symbols.insert(name.clone(), value.clone());
            Ok(Outcome::Defined { name: name.clone(),
                                  value })
        },
        Instruction::Binary { op, left, right } => {
            let left = resolve(left, symbols)?;
            let right = resolve(right, symbols)?;
            eval_binary(*op, &left, &right).map(Outcome::Computed)
        },
        Instruction::Unary { op, name } => {
            eval_unary(*op, variable(name, symbols)?).map(Outcome::Computed)
        },
        Instruction::Extremum { op, names } => {
            let values = names.iter()
                              .map(|name| variable(name, symbols).cloned())
                              .collect::<EvalResult<Vec<_>>>()?;
            min_max(*op, &values).map(Outcome::Computed)
        },
        Instruction::Print { name } => {
            Ok(Outcome::Printed { name:  name.clone(),
                                  value: variable(name, symbols)?.clone(), })
        },
    }
}

/// Reads a variable, failing if it is not bound.
fn variable<'a>(name: &str, symbols: &'a SymbolTable) -> EvalResult<&'a Value> {
    symbols.get(name)
           .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string() })
}

/// Resolves an operand: variables through the table, literals by kind.
fn resolve(operand: &Operand, symbols: &SymbolTable) -> EvalResult<Value> {
    match operand {
        Operand::Variable(name) => variable(name, symbols).cloned(),
        Operand::Literal(literal) => Value::from_literal(literal).map_err(|e| {
                                         RuntimeError::LiteralTooLarge { lexeme: e.lexeme }
                                     }),
    }
}
