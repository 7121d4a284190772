//! Automaton construction errors.

use thiserror::Error;

use crate::table::State;

/// A topology defect found while constructing a [`Dfa`](crate::Dfa).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// The initial state is not one of the automaton's states.
    #[error("initial state {0} is not a state of this automaton")]
    UnknownInitial(State),

    /// An accepting state is not one of the automaton's states.
    #[error("accepting state {0} is not a state of this automaton")]
    UnknownFinal(State),

    /// A transition leaves a state the automaton does not have.
    #[error("transition source {0} is not a state of this automaton")]
    UnknownSource(State),

    /// A transition leads to a state the automaton does not have.
    #[error("transition target {0} is not a state of this automaton")]
    UnknownTarget(State),

    /// A state has no wildcard entry, so some symbol would have no successor.
    #[error("state {0} has no wildcard transition")]
    MissingFallback(State),
}

/// Result alias for automaton construction.
pub type AutomatonResult<T> = Result<T, AutomatonError>;
