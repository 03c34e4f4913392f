#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while loading a keyword table.
pub enum ConfigError {
    /// A line is not of the form `keyword = action`.
    MalformedEntry {
        /// The line number in the table source.
        line: usize,
    },
    /// The action name is not one of the known actions.
    UnknownAction {
        /// The action name as written.
        name: String,
        /// The line number in the table source.
        line: usize,
    },
    /// The keyword cannot be produced as a single word by the tokenizer.
    InvalidKeyword {
        /// The keyword as written.
        keyword: String,
        /// The line number in the table source.
        line:    usize,
    },
    /// The same keyword was mapped twice.
    DuplicateKeyword {
        /// The keyword, lower-cased.
        keyword: String,
        /// The line number of the second mapping.
        line:    usize,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedEntry { line } => {
                write!(f, "Error on line {line}: Expected an entry of the form 'keyword = action'.")
            },
            Self::UnknownAction { name, line } => {
                write!(f, "Error on line {line}: Unknown action '{name}'.")
            },
            Self::InvalidKeyword { keyword, line } => {
                write!(f, "Error on line {line}: '{keyword}' cannot be used as a keyword.")
            },
            Self::DuplicateKeyword { keyword, line } => {
                write!(f, "Error on line {line}: Keyword '{keyword}' is mapped more than once.")
            },
        }
    }
}

impl std::error::Error for ConfigError {}
