//! Recognizer for one fixed word.

use crate::dfa::Dfa;
use crate::table::{State, TransitionTable};

/// Build an automaton accepting exactly `word`.
///
/// For `"foo"` the shape is `q0 -f-> q1 -o-> q2 -o-> [q3]`. Every other
/// character, from any state including the accepting one, leads to the
/// sink `q4`, which never leaves.
pub fn word_dfa(word: &str) -> Dfa {
    let letters: Vec<char> = word.chars().collect();
    let accept = letters.len();
    let sink = accept + 1;

    let mut table = TransitionTable::new();
    for (i, &c) in letters.iter().enumerate() {
        table = table.on(i, c, i + 1);
    }
    for state in 0..=sink {
        table = table.otherwise(state, sink);
    }

    match Dfa::new((0..=sink).map(State), State(0), [State(accept)], table) {
        Ok(dfa) => dfa,
        Err(e) => unreachable!("word automaton for {word:?} is malformed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology() {
        let dfa = word_dfa("foo");
        assert_eq!(dfa.states().len(), 5);
        assert_eq!(dfa.initial(), State(0));
        assert_eq!(dfa.finals().iter().copied().collect::<Vec<_>>(), vec![State(3)]);
        // three letters plus one wildcard per state
        assert_eq!(dfa.transitions().len(), 3 + 5);
    }

    #[test]
    fn test_accepts_only_the_word() {
        let mut dfa = word_dfa("foo");
        assert!(dfa.run("foo"));
        assert!(!dfa.run("fo"));
        assert!(!dfa.run("fooo"));
        assert!(!dfa.run("bar"));
        assert!(!dfa.run(""));
    }

    #[test]
    fn test_sink_is_absorbing() {
        let mut dfa = word_dfa("ab");
        dfa.step('x');
        assert_eq!(dfa.current(), State(3));
        dfa.step('a');
        dfa.step('b');
        assert_eq!(dfa.current(), State(3));
        assert!(!dfa.is_accepting());
    }

    #[test]
    fn test_empty_word() {
        let mut dfa = word_dfa("");
        assert_eq!(dfa.initial(), State(0));
        assert!(dfa.finals().contains(&dfa.initial()));
        assert!(dfa.run(""));
        assert!(!dfa.run("a"));
        assert!(!dfa.run(" "));
    }

    #[test]
    fn test_unicode_word() {
        let mut dfa = word_dfa("città");
        assert!(dfa.run("città"));
        assert!(!dfa.run("citta"));
    }
}
