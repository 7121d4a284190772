//! Flat variable store for the minipas interpreter.

use std::collections::BTreeMap;

/// All variables of one program run.
///
/// There is a single scope: every declaration is global to the run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    bindings: BTreeMap<String, i64>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `name` with value 0.
    /// Returns `false`, leaving the store untouched, if it already exists.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.bindings.contains_key(name) {
            return false;
        }
        self.bindings.insert(name.to_string(), 0);
        true
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    /// Overwrite a declared variable.
    /// Returns `false` if `name` was never declared.
    pub fn set(&mut self, name: &str, value: i64) -> bool {
        match self.bindings.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
