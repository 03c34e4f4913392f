use std::collections::HashMap;

use crate::interpreter::value::Value;

/// The live variables of one interpreter session.
///
/// A name is either absent or bound to exactly one [`Value`]. Names are stored
/// as the tokenizer produced them, so identifiers are already lower-cased.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    variables: HashMap<String, Value>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(name.into(), value)
    }

    /// Unbinds `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in name order.
    ///
    /// # Example
    /// ```
    /// use gamer::interpreter::{symbols::SymbolTable, value::Value};
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.insert("oro", Value::Integer(5));
    /// symbols.insert("mana", Value::Float(0.5));
    ///
    /// let names = symbols.iter().map(|(name, _)| name).collect::<Vec<_>>();
    /// assert_eq!(names, ["mana", "oro"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut bindings = self.variables
                               .iter()
                               .map(|(name, value)| (name.as_str(), value))
                               .collect::<Vec<_>>();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings.into_iter()
    }
}
