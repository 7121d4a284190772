//! Deterministic finite automata for the minipas toolchain.
//!
//! One engine type, [`Dfa`], driven by a [`TransitionTable`] with a
//! wildcard fallback per state. Concrete recognizers are factory
//! functions returning a configured [`Dfa`]:
//!
//! - [`word_dfa`] accepts exactly one word
//! - [`comment_dfa`] accepts `// ...\n`, `(* ... *)` and `{ ... }` comments

mod dfa;
mod error;
mod table;
pub mod comment;
pub mod word;

pub use comment::comment_dfa;
pub use dfa::Dfa;
pub use error::{AutomatonError, AutomatonResult};
pub use table::{State, Symbol, TransitionTable};
pub use word::word_dfa;
