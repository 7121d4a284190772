//! Recognizer for the three comment forms of the language.
//!
//! ```text
//! // line comment\n
//! (* block comment *)
//! { brace comment }
//! ```
//!
//! The automaton accepts when the cursor sits right after a terminator.
//! Anything following the terminator falls into the sink.

use crate::dfa::Dfa;
use crate::table::{State, TransitionTable};

pub const START: State = State(0);
pub const AFTER_SLASH: State = State(1);
pub const AFTER_PAREN: State = State(2);
pub const IN_BRACE: State = State(3);
pub const IN_LINE: State = State(4);
pub const IN_BLOCK: State = State(5);
pub const BLOCK_STAR: State = State(6);
pub const ACCEPT: State = State(7);
pub const SINK: State = State(8);

const N_STATES: usize = 9;

/// Build the comment automaton.
pub fn comment_dfa() -> Dfa {
    let table = TransitionTable::new()
        // openers; nothing else may start a comment
        .on(START.0, '/', AFTER_SLASH.0)
        .on(START.0, '(', AFTER_PAREN.0)
        .on(START.0, '{', IN_BRACE.0)
        .otherwise(START.0, SINK.0)
        .on(AFTER_SLASH.0, '/', IN_LINE.0)
        .otherwise(AFTER_SLASH.0, SINK.0)
        .on(AFTER_PAREN.0, '*', IN_BLOCK.0)
        .otherwise(AFTER_PAREN.0, SINK.0)
        // bodies
        .on(IN_BRACE.0, '}', ACCEPT.0)
        .otherwise(IN_BRACE.0, IN_BRACE.0)
        .on(IN_LINE.0, '\n', ACCEPT.0)
        .otherwise(IN_LINE.0, IN_LINE.0)
        .on(IN_BLOCK.0, '*', BLOCK_STAR.0)
        .otherwise(IN_BLOCK.0, IN_BLOCK.0)
        .on(BLOCK_STAR.0, ')', ACCEPT.0)
        .otherwise(BLOCK_STAR.0, IN_BLOCK.0)
        // past the terminator
        .otherwise(ACCEPT.0, SINK.0)
        .otherwise(SINK.0, SINK.0);

    match Dfa::new((0..N_STATES).map(State), START, [ACCEPT], table) {
        Ok(dfa) => dfa,
        Err(e) => unreachable!("comment automaton is malformed: {e}"),
    }
}
