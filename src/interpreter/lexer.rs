use logos::Logos;

use crate::config::KeywordTable;

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An instruction keyword from the keyword table, such as `crear`.
    Keyword,
    /// A variable name such as `vida`.
    Identifier,
    /// An integer literal such as `100` or `-4`.
    Number,
    /// A decimal literal such as `3.14`.
    Decimal,
    /// A double-quoted text literal.
    String,
    /// `=`
    Equals,
    /// Anything the other kinds do not cover.
    Unknown,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Decimal => "DECIMAL",
            Self::String => "STRING",
            Self::Equals => "EQUALS",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{name}")
    }
}

/// A lexical unit of one instruction line.
///
/// Keyword and identifier lexemes are lower-cased. String lexemes hold the
/// unquoted text with its case preserved. Unknown lexemes are kept exactly as
/// written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The category of the token.
    pub kind:   TokenKind,
    /// The normalized text of the token.
    pub lexeme: String,
}

impl Token {
    /// Creates a token from a kind and a lexeme.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self { kind,
               lexeme: lexeme.into() }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.lexeme)
    }
}

/// Raw lexemes of a line, before keywords are told apart from identifiers.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// `"..."`, may contain whitespace.
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    Quoted,
    /// A quote that is never closed; runs to the end of the line.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    Unterminated,
    /// `=`
    #[token("=")]
    Equals,
    /// `-12`, `100`
    #[regex(r"-?[0-9]+", priority = 3)]
    Number,
    /// `-0.5`, `3.14`
    #[regex(r"-?[0-9]+\.[0-9]+", priority = 3)]
    Decimal,
    /// Letters, digits and underscores, not starting with a digit.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", priority = 2)]
    Word,
    /// Any other run of non-blank characters.
    #[regex(r#"[^\s"]+"#, priority = 1, allow_greedy = true)]
    Other,
    /// Blanks between lexemes.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits a line into tokens.
///
/// Tokenization never fails: a lexeme that matches no other category becomes a
/// [`TokenKind::Unknown`] token and is left for the syntax validator to
/// reject.
///
/// # Parameters
/// - `line`: The raw instruction text.
/// - `keywords`: The keyword table used to recognize instruction keywords.
///
/// # Returns
/// The tokens in source order.
///
/// # Example
/// ```
/// use gamer::{
///     config::KeywordTable,
///     interpreter::lexer::{Token, TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("CREAR Vida = 100", &KeywordTable::default());
///
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::Keyword, "crear"),
///                 Token::new(TokenKind::Identifier, "vida"),
///                 Token::new(TokenKind::Equals, "="),
///                 Token::new(TokenKind::Number, "100")]);
/// ```
#[must_use]
pub fn tokenize(line: &str, keywords: &KeywordTable) -> Vec<Token> {
    let mut lexer = Lexeme::lexer(line);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let slice = lexer.slice();

        let token = match lexeme {
            Ok(Lexeme::Quoted) => {
                let text = slice.strip_prefix('"')
                                .and_then(|s| s.strip_suffix('"'))
                                .unwrap_or(slice);
                Token::new(TokenKind::String, text)
            },
            Ok(Lexeme::Equals) => Token::new(TokenKind::Equals, slice),
            Ok(Lexeme::Number) => Token::new(TokenKind::Number, slice),
            Ok(Lexeme::Decimal) => Token::new(TokenKind::Decimal, slice),
            Ok(Lexeme::Word) => classify_word(slice, keywords, TokenKind::Identifier),
            Ok(Lexeme::Other) => classify_word(slice, keywords, TokenKind::Unknown),
            Ok(Lexeme::Unterminated | Lexeme::Ignored) | Err(()) => {
                Token::new(TokenKind::Unknown, slice)
            },
        };

        tokens.push(token);
    }

    tokens
}

/// Classifies a word as a keyword when its lower-cased form is in the table,
/// and as `fallback` otherwise.
///
/// Identifiers are lower-cased; unknown lexemes keep their spelling.
fn classify_word(word: &str, keywords: &KeywordTable, fallback: TokenKind) -> Token {
    let lowered = word.to_lowercase();

    if keywords.contains(&lowered) {
        return Token::new(TokenKind::Keyword, lowered);
    }

    match fallback {
        TokenKind::Identifier => Token::new(TokenKind::Identifier, lowered),
        kind => Token::new(kind, word),
    }
}
