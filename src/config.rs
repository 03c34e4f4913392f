use std::{collections::HashMap, str::FromStr};

use crate::error::ConfigError;

/// The abstract action an instruction keyword stands for.
///
/// Every stage of the pipeline matches on this enum exhaustively, so adding an
/// action is a compile-checked change in each stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `crear <identifier> = <value>`
    DefineVariable,
    /// `curar <identifier> <identifier>`
    Add,
    /// `golpear <identifier> <identifier>`
    Subtract,
    /// `multiplicar <operand> <operand>`
    Multiply,
    /// `dividir <operand> <operand>`
    Divide,
    /// `poder <operand> <operand>`
    Power,
    /// `revivir <identifier>`
    SquareRoot,
    /// `xp <identifier>`
    Absolute,
    /// `jefe <identifier>...`
    Maximum,
    /// `esbirro <identifier>...`
    Minimum,
    /// `decir <identifier>`
    Print,
}

/// Actions paired with the name used for them in keyword table sources.
const ACTION_NAMES: &[(&str, Action)] = &[("define", Action::DefineVariable),
                                          ("add", Action::Add),
                                          ("subtract", Action::Subtract),
                                          ("multiply", Action::Multiply),
                                          ("divide", Action::Divide),
                                          ("power", Action::Power),
                                          ("sqrt", Action::SquareRoot),
                                          ("abs", Action::Absolute),
                                          ("max", Action::Maximum),
                                          ("min", Action::Minimum),
                                          ("print", Action::Print)];

/// The standard vocabulary.
const DEFAULT_KEYWORDS: &[(&str, Action)] = &[("crear", Action::DefineVariable),
                                              ("curar", Action::Add),
                                              ("golpear", Action::Subtract),
                                              ("multiplicar", Action::Multiply),
                                              ("dividir", Action::Divide),
                                              ("poder", Action::Power),
                                              ("revivir", Action::SquareRoot),
                                              ("xp", Action::Absolute),
                                              ("jefe", Action::Maximum),
                                              ("esbirro", Action::Minimum),
                                              ("decir", Action::Print)];

impl Action {
    /// Returns the name of the action as used in keyword table sources.
    #[must_use]
    pub fn name(self) -> &'static str {
        ACTION_NAMES.iter()
                    .find(|(_, action)| *action == self)
                    .map_or("unknown", |(name, _)| *name)
    }

    /// Returns the operand template of the action, used in syntax error
    /// messages after the keyword itself.
    #[must_use]
    pub const fn operands(self) -> &'static str {
        match self {
            Self::DefineVariable => "<identifier> = <number|decimal|identifier|\"text\">",
            Self::Add | Self::Subtract => "<identifier> <identifier>",
            Self::Multiply | Self::Divide | Self::Power => {
                "<number|decimal|identifier> <number|decimal|identifier>"
            },
            Self::SquareRoot | Self::Absolute | Self::Print => "<identifier>",
            Self::Maximum | Self::Minimum => "<identifier> [<identifier>...]",
        }
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ACTION_NAMES.iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(s))
                    .map(|(_, action)| *action)
                    .ok_or(())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Maps surface keywords to the actions they trigger.
///
/// Keywords are stored lower-cased; lookups must use the lower-cased lexeme.
/// The table is immutable once built and is meant to be shared between
/// sessions behind an `Arc`.
///
/// # Example
/// ```
/// use gamer::config::{Action, KeywordTable};
///
/// let table: KeywordTable = "# english vocabulary\nmake = define\nshow = print\n".parse()
///                                                                              .unwrap();
///
/// assert_eq!(table.action("make"), Some(Action::DefineVariable));
/// assert_eq!(table.action("crear"), None);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    keywords: HashMap<String, Action>,
}

impl KeywordTable {
    /// Returns the action bound to a lower-cased keyword.
    #[must_use]
    pub fn action(&self, keyword: &str) -> Option<Action> {
        self.keywords.get(keyword).copied()
    }

    /// Returns `true` if the lower-cased lexeme is a keyword.
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    /// Returns the number of keywords in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` if the table has no keywords.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Returns all keywords with their actions, sorted by keyword.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, Action)> {
        let mut entries = self.keywords
                              .iter()
                              .map(|(keyword, action)| (keyword.as_str(), *action))
                              .collect::<Vec<_>>();
        entries.sort_unstable_by_key(|(keyword, _)| *keyword);
        entries
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self { keywords: DEFAULT_KEYWORDS.iter()
                                         .map(|(keyword, action)| ((*keyword).to_string(), *action))
                                         .collect(), }
    }
}

/// Returns `true` if the keyword survives tokenization as one word.
fn is_valid_keyword(keyword: &str) -> bool {
    !keyword.is_empty()
    && keyword != "="
    && !keyword.chars().any(|c| c.is_whitespace() || c == '"')
    && !keyword.trim_start_matches('-').starts_with(|c: char| c.is_ascii_digit())
}

impl FromStr for KeywordTable {
    type Err = ConfigError;

    /// Parses a keyword table source.
    ///
    /// Each non-blank line that does not start with `#` must be
    /// `keyword = action`.
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let mut keywords = HashMap::new();

        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let entry = raw.trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            let (keyword, action) =
                entry.split_once('=').ok_or(ConfigError::MalformedEntry { line })?;
            let keyword = keyword.trim().to_lowercase();
            let action = action.trim();

            if !is_valid_keyword(&keyword) {
                return Err(ConfigError::InvalidKeyword { keyword, line });
            }
            let action = action.parse::<Action>()
                               .map_err(|()| ConfigError::UnknownAction { name: action.to_string(),
                                                                          line })?;

            if keywords.insert(keyword.clone(), action).is_some() {
                return Err(ConfigError::DuplicateKeyword { keyword, line });
            }
        }

        Ok(Self { keywords })
    }
}
