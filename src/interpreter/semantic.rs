use tracing::debug;

use crate::{
    ast::{BinaryOperator, Instruction, Operand, UnaryOperator},
    error::SemanticError,
    interpreter::{symbols::SymbolTable, value::Value},
};

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Validates the meaning of an instruction against the live variables.
///
/// Existence checks always run before domain checks: a division is only
/// checked for a zero divisor once both operands are known to exist.
///
/// On success, `crear` registers its variable in `symbols` with the value of
/// its right-hand side. Every other instruction leaves the table untouched.
/// On failure the table is never modified.
///
/// # Errors
/// - `AlreadyDefined` if `crear` targets an existing variable.
/// - `UnknownVariable` if a referenced variable does not exist.
/// - `LiteralOutOfRange` if an integer literal does not fit.
/// - `DivisionByZero` if the divisor of `dividir` is exactly zero.
/// - `NegativeRadicand` if `revivir` targets a negative variable.
///
/// # Example
/// ```
/// use gamer::{
///     ast::{BinaryOperator, Instruction, Operand},
///     error::SemanticError,
///     interpreter::{semantic::validate, symbols::SymbolTable, value::Value},
/// };
///
/// let mut symbols = SymbolTable::new();
/// symbols.insert("oro", Value::Integer(100));
/// symbols.insert("cofres", Value::Integer(0));
///
/// let division = Instruction::Binary { op:    BinaryOperator::Divide,
///                                      left:  Operand::variable("oro"),
///                                      right: Operand::variable("cofres"), };
///
/// assert_eq!(validate(&division, &mut symbols), Err(SemanticError::DivisionByZero));
/// ```
pub fn validate(instruction: &Instruction, symbols: &mut SymbolTable) -> SemanticResult<()> {
    let result = check(instruction, symbols);

    if let Err(e) = &result {
        debug!(error = %e, "semantic validation failed");
    }

    result
}

fn check(instruction: &Instruction, symbols: &mut SymbolTable) -> SemanticResult<()> {
    match instruction {
        Instruction::Define { name, value } => {
            if symbols.contains(name) {
                return Err(SemanticError::AlreadyDefined { name: name.clone() });
            }

            let value = resolve(value, symbols)?;
            symbols.insert(name.clone(), value);
            Ok(())
        },
        Instruction::Binary { op, left, right } => {
            resolve(left, symbols)?;
            let divisor = resolve(right, symbols)?;

            if *op == BinaryOperator::Divide && divisor.is_zero() {
                return Err(SemanticError::DivisionByZero);
            }
            Ok(())
        },
        Instruction::Unary { op, name } => {
            let value = lookup(name, symbols)?;

            match op {
                UnaryOperator::SquareRoot if value.is_negative() => {
                    Err(SemanticError::NegativeRadicand { name: name.clone() })
                },
                UnaryOperator::SquareRoot | UnaryOperator::Absolute => Ok(()),
            }
        },
        Instruction::Extremum { names, .. } => {
            for name in names {
                lookup(name, symbols)?;
            }
            Ok(())
        },
        Instruction::Print { name } => lookup(name, symbols).map(|_| ()),
    }
}

/// Returns the value of an existing variable.
fn lookup<'a>(name: &str, symbols: &'a SymbolTable) -> SemanticResult<&'a Value> {
    symbols.get(name)
           .ok_or_else(|| SemanticError::UnknownVariable { name: name.to_string() })
}

/// Resolves an operand to the value it stands for.
fn resolve(operand: &Operand, symbols: &SymbolTable) -> SemanticResult<Value> {
    match operand {
        Operand::Variable(name) => lookup(name, symbols).cloned(),
        Operand::Literal(literal) => Value::from_literal(literal).map_err(|e| {
                                         SemanticError::LiteralOutOfRange { lexeme: e.lexeme }
                                     }),
    }
}
