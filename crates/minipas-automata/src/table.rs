//! Transition tables with a per-state wildcard fallback.

use std::collections::BTreeMap;
use std::fmt;

/// Identifies one automaton configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State(pub usize);

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A transition label.
///
/// `Wildcard` stands for "every character without an explicit entry".
/// It is its own variant, so it can never collide with real input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Char(char),
    Wildcard,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Wildcard => write!(f, "*"),
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Maps `(state, symbol)` pairs to successor states.
///
/// Lookups try the exact character first and fall back to the state's
/// wildcard entry, so a table only lists the interesting transitions
/// plus one catch-all per state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    entries: BTreeMap<(State, Symbol), State>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a transition. Returns the previous target, if any.
    pub fn insert(&mut self, from: State, symbol: Symbol, to: State) -> Option<State> {
        self.entries.insert((from, symbol), to)
    }

    /// Builder-style explicit transition on one character.
    pub fn on(mut self, from: usize, c: char, to: usize) -> Self {
        self.insert(State(from), Symbol::Char(c), State(to));
        self
    }

    /// Builder-style wildcard transition.
    pub fn otherwise(mut self, from: usize, to: usize) -> Self {
        self.insert(State(from), Symbol::Wildcard, State(to));
        self
    }

    /// Exact lookup, without wildcard fallback.
    pub fn get(&self, from: State, symbol: Symbol) -> Option<State> {
        self.entries.get(&(from, symbol)).copied()
    }

    /// Resolve the successor of `from` on input character `c`.
    ///
    /// Returns `None` only when `from` has neither an entry for `c` nor a
    /// wildcard entry.
    pub fn lookup(&self, from: State, c: char) -> Option<State> {
        self.get(from, Symbol::Char(c))
            .or_else(|| self.get(from, Symbol::Wildcard))
    }

    /// Whether `state` has a wildcard entry.
    pub fn has_fallback(&self, state: State) -> bool {
        self.entries.contains_key(&(state, Symbol::Wildcard))
    }

    /// Number of entries, wildcard entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in `(from, symbol)` order.
    pub fn iter(&self) -> impl Iterator<Item = (State, Symbol, State)> + '_ {
        self.entries
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TransitionTable {
        TransitionTable::new().on(0, 'a', 1).otherwise(0, 2).otherwise(1, 2)
    }

    #[test]
    fn test_exact_entry_wins() {
        assert_eq!(table().lookup(State(0), 'a'), Some(State(1)));
    }

    #[test]
    fn test_wildcard_fallback() {
        assert_eq!(table().lookup(State(0), 'z'), Some(State(2)));
        assert_eq!(table().lookup(State(1), 'a'), Some(State(2)));
    }

    #[test]
    fn test_gap_is_none() {
        assert_eq!(table().lookup(State(2), 'a'), None);
        assert!(!table().has_fallback(State(2)));
    }

    #[test]
    fn test_get_ignores_wildcard() {
        assert_eq!(table().get(State(0), Symbol::Char('z')), None);
        assert_eq!(table().get(State(0), Symbol::Wildcard), Some(State(2)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut t = table();
        assert_eq!(t.insert(State(0), 'a'.into(), State(0)), Some(State(1)));
        assert_eq!(t.lookup(State(0), 'a'), Some(State(0)));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_iter_is_ordered() {
        let entries: Vec<_> = table().iter().collect();
        assert_eq!(
            entries,
            vec![
                (State(0), Symbol::Char('a'), State(1)),
                (State(0), Symbol::Wildcard, State(2)),
                (State(1), Symbol::Wildcard, State(2)),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(State(3).to_string(), "q3");
        assert_eq!(Symbol::Char('\n').to_string(), "'\\n'");
        assert_eq!(Symbol::Wildcard.to_string(), "*");
    }
}
