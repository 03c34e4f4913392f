use tracing::debug;

use crate::{
    ast::{BinaryOperator, Extremum, Instruction, Operand, UnaryOperator},
    config::{Action, KeywordTable},
    error::SyntaxError,
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Value kinds accepted on the right-hand side of `crear`.
const DEFINE_VALUE: &[TokenKind] = &[TokenKind::Number,
                                     TokenKind::Decimal,
                                     TokenKind::Identifier,
                                     TokenKind::String];

/// Operand kinds accepted by `multiplicar`, `dividir` and `poder`.
const NUMERIC_OPERAND: &[TokenKind] =
    &[TokenKind::Number, TokenKind::Decimal, TokenKind::Identifier];

/// Checks the shape of a token sequence and builds the typed instruction.
///
/// The first token selects the template; the remaining tokens must match it
/// exactly:
///
/// ```text
///     crear <identifier> = <number|decimal|identifier|string>
///     curar | golpear <identifier> <identifier>
///     multiplicar | dividir | poder <number|decimal|identifier> x2
///     revivir | xp | decir <identifier>
///     jefe | esbirro <identifier>+
/// ```
///
/// # Parameters
/// - `tokens`: Tokens of one line.
/// - `keywords`: The keyword table the tokens were produced with.
///
/// # Returns
/// The instruction described by the tokens.
///
/// # Errors
/// - `Empty` if there are no tokens.
/// - `UnknownInstruction` if the first token is not a keyword.
/// - `InvalidSyntax` if the operands do not match the keyword's template.
///
/// # Example
/// ```
/// use gamer::{
///     ast::{Instruction, Operand},
///     config::KeywordTable,
///     interpreter::{lexer::tokenize, parser::parse_instruction},
/// };
///
/// let keywords = KeywordTable::default();
/// let tokens = tokenize("crear vida = 100", &keywords);
///
/// assert_eq!(parse_instruction(&tokens, &keywords).unwrap(),
///            Instruction::Define { name:  "vida".to_string(),
///                                  value: Operand::number("100"), });
/// ```
pub fn parse_instruction(tokens: &[Token], keywords: &KeywordTable) -> ParseResult<Instruction> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(SyntaxError::Empty);
    };

    let action = match first.kind {
        TokenKind::Keyword => keywords.action(&first.lexeme),
        _ => None,
    };
    let Some(action) = action else {
        debug!(lexeme = %first.lexeme, "instruction not recognized");
        return Err(SyntaxError::UnknownInstruction { lexeme: first.lexeme.clone() });
    };

    let instruction = match action {
        Action::DefineVariable => match rest {
            [name, equals, value]
                if name.kind == TokenKind::Identifier
                   && equals.kind == TokenKind::Equals
                   && DEFINE_VALUE.contains(&value.kind) =>
            {
                let name = name.lexeme.clone();
                Operand::from_token(value).map(|value| Instruction::Define { name, value })
            },
            _ => None,
        },
        Action::Add => parse_binary(BinaryOperator::Add, rest, &[TokenKind::Identifier]),
        Action::Subtract => parse_binary(BinaryOperator::Subtract, rest, &[TokenKind::Identifier]),
        Action::Multiply => parse_binary(BinaryOperator::Multiply, rest, NUMERIC_OPERAND),
        Action::Divide => parse_binary(BinaryOperator::Divide, rest, NUMERIC_OPERAND),
        Action::Power => parse_binary(BinaryOperator::Power, rest, NUMERIC_OPERAND),
        Action::SquareRoot => {
            parse_single(rest).map(|name| Instruction::Unary { op: UnaryOperator::SquareRoot,
                                                               name })
        },
        Action::Absolute => {
            parse_single(rest).map(|name| Instruction::Unary { op: UnaryOperator::Absolute,
                                                               name })
        },
        Action::Print => parse_single(rest).map(|name| Instruction::Print { name }),
        Action::Maximum => {
            parse_list(rest).map(|names| Instruction::Extremum { op: Extremum::Maximum,
                                                                 names })
        },
        Action::Minimum => {
            parse_list(rest).map(|names| Instruction::Extremum { op: Extremum::Minimum,
                                                                 names })
        },
    };

    instruction.ok_or_else(|| {
                   debug!(keyword = %first.lexeme,
                          operands = rest.len(),
                          "operands do not match template");
                   SyntaxError::InvalidSyntax { keyword: first.lexeme.clone(),
                                                usage:   format!("{} {}",
                                                                 first.lexeme,
                                                                 action.operands()), }
               })
}

/// Matches exactly two operands whose kinds are in `allowed`.
fn parse_binary(op: BinaryOperator, rest: &[Token], allowed: &[TokenKind]) -> Option<Instruction> {
    match rest {
        [left, right] if allowed.contains(&left.kind) && allowed.contains(&right.kind) => {
            Some(Instruction::Binary { op,
                                       left: Operand::from_token(left)?,
                                       right: Operand::from_token(right)? })
        },
        _ => None,
    }
}

/// Matches exactly one identifier.
fn parse_single(rest: &[Token]) -> Option<String> {
    match rest {
        [name] if name.kind == TokenKind::Identifier => Some(name.lexeme.clone()),
        _ => None,
    }
}

/// Matches one or more identifiers.
fn parse_list(rest: &[Token]) -> Option<Vec<String>> {
    if rest.is_empty() || rest.iter().any(|token| token.kind != TokenKind::Identifier) {
        return None;
    }

    Some(rest.iter().map(|token| token.lexeme.clone()).collect())
}
