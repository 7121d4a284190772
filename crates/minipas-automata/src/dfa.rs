//! The automaton engine shared by every recognizer.

use std::collections::BTreeSet;

use crate::error::{AutomatonError, AutomatonResult};
use crate::table::{State, Symbol, TransitionTable};

/// A deterministic finite automaton over `char` input.
///
/// The topology (states, initial state, accepting states, transitions) is
/// fixed at construction. Only the cursor moves: [`step`](Self::step)
/// advances it, [`reset`](Self::reset) rewinds it.
#[derive(Debug, Clone)]
pub struct Dfa {
    states: BTreeSet<State>,
    initial: State,
    finals: BTreeSet<State>,
    current: State,
    transitions: TransitionTable,
}

impl Dfa {
    /// Build an automaton, checking that the table is total.
    ///
    /// Every state must own a wildcard entry and every state mentioned by
    /// `initial`, `finals` or a transition must belong to `states`.
    pub fn new(
        states: impl IntoIterator<Item = State>,
        initial: State,
        finals: impl IntoIterator<Item = State>,
        transitions: TransitionTable,
    ) -> AutomatonResult<Self> {
        let states: BTreeSet<State> = states.into_iter().collect();
        let finals: BTreeSet<State> = finals.into_iter().collect();

        if !states.contains(&initial) {
            return Err(AutomatonError::UnknownInitial(initial));
        }
        if let Some(&f) = finals.iter().find(|f| !states.contains(*f)) {
            return Err(AutomatonError::UnknownFinal(f));
        }
        for (from, _, to) in transitions.iter() {
            if !states.contains(&from) {
                return Err(AutomatonError::UnknownSource(from));
            }
            if !states.contains(&to) {
                return Err(AutomatonError::UnknownTarget(to));
            }
        }
        if let Some(&s) = states.iter().find(|&&s| !transitions.has_fallback(s)) {
            return Err(AutomatonError::MissingFallback(s));
        }

        log::debug!(
            "built automaton: {} states, {} transitions, {} accepting",
            states.len(),
            transitions.len(),
            finals.len()
        );

        Ok(Self {
            states,
            initial,
            finals,
            current: initial,
            transitions,
        })
    }

    /// Rewind the cursor to the initial state.
    pub fn reset(&mut self) {
        self.current = self.initial;
    }

    /// Consume one input character.
    pub fn step(&mut self, c: char) {
        let next = match self.transitions.lookup(self.current, c) {
            Some(next) => next,
            // `new` rejects tables where a state lacks a wildcard entry.
            None => unreachable!(
                "transition table gap at {} on {}",
                self.current,
                Symbol::Char(c)
            ),
        };
        log::trace!("{} --{}--> {}", self.current, Symbol::Char(c), next);
        self.current = next;
    }

    /// Whether the cursor sits on an accepting state.
    pub fn is_accepting(&self) -> bool {
        self.finals.contains(&self.current)
    }

    /// Reset, feed every character of `input`, and report acceptance.
    pub fn run(&mut self, input: &str) -> bool {
        self.reset();
        for c in input.chars() {
            self.step(c);
        }
        self.is_accepting()
    }

    pub fn states(&self) -> &BTreeSet<State> {
        &self.states
    }

    pub fn initial(&self) -> State {
        self.initial
    }

    pub fn finals(&self) -> &BTreeSet<State> {
        &self.finals
    }

    pub fn current(&self) -> State {
        self.current
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts strings over {a, b} with an odd number of `a`s.
    fn odd_as() -> Dfa {
        let table = TransitionTable::new()
            .on(0, 'a', 1)
            .on(0, 'b', 0)
            .otherwise(0, 2)
            .on(1, 'a', 0)
            .on(1, 'b', 1)
            .otherwise(1, 2)
            .otherwise(2, 2);
        Dfa::new([State(0), State(1), State(2)], State(0), [State(1)], table)
            .expect("valid automaton")
    }

    #[test]
    fn test_new_starts_at_initial() {
        let dfa = odd_as();
        assert_eq!(dfa.current(), State(0));
        assert!(!dfa.is_accepting());
    }

    #[test]
    fn test_step_and_accept() {
        let mut dfa = odd_as();
        dfa.step('a');
        assert!(dfa.is_accepting());
        dfa.step('b');
        assert!(dfa.is_accepting());
        dfa.step('a');
        assert!(!dfa.is_accepting());
    }

    #[test]
    fn test_unknown_symbol_hits_sink() {
        let mut dfa = odd_as();
        assert!(!dfa.run("ac"));
        assert_eq!(dfa.current(), State(2));
    }

    #[test]
    fn test_run_resets_first() {
        let mut dfa = odd_as();
        dfa.step('c');
        assert!(dfa.run("aaba"));
        assert!(dfa.run("a"));
    }

    #[test]
    fn test_reset() {
        let mut dfa = odd_as();
        dfa.run("a");
        dfa.reset();
        assert_eq!(dfa.current(), dfa.initial());
    }

    #[test]
    fn test_missing_fallback_rejected() {
        let table = TransitionTable::new().on(0, 'a', 1).otherwise(0, 1);
        let err = Dfa::new([State(0), State(1)], State(0), [State(1)], table).unwrap_err();
        assert_eq!(err, AutomatonError::MissingFallback(State(1)));
    }

    #[test]
    fn test_unknown_initial_rejected() {
        let table = TransitionTable::new().otherwise(0, 0);
        let err = Dfa::new([State(0)], State(5), [State(0)], table).unwrap_err();
        assert_eq!(err, AutomatonError::UnknownInitial(State(5)));
    }

    #[test]
    fn test_unknown_final_rejected() {
        let table = TransitionTable::new().otherwise(0, 0);
        let err = Dfa::new([State(0)], State(0), [State(9)], table).unwrap_err();
        assert_eq!(err, AutomatonError::UnknownFinal(State(9)));
    }

    #[test]
    fn test_dangling_transition_rejected() {
        let table = TransitionTable::new().otherwise(0, 3);
        let err = Dfa::new([State(0)], State(0), [State(0)], table).unwrap_err();
        assert_eq!(err, AutomatonError::UnknownTarget(State(3)));

        let table = TransitionTable::new().otherwise(0, 0).otherwise(4, 0);
        let err = Dfa::new([State(0)], State(0), [State(0)], table).unwrap_err();
        assert_eq!(err, AutomatonError::UnknownSource(State(4)));
    }
}
