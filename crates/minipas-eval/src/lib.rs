//! minipas tree-walking interpreter.
//!
//! Executes a program tree handed over by the parser. Fatal errors
//! (duplicate declarations, undefined variables, arithmetic traps) stop
//! the run and come back as [`EvalError`]; deciding what to do with them
//! is up to the caller.

mod config;
mod env;
mod error;
mod evaluator;
mod input;

use std::io::{BufRead, Write};

use minipas_types::ast::Program;

pub use config::RunConfig;
pub use env::Store;
pub use error::{EvalError, EvalResult};
pub use evaluator::TreeWalker;

/// Run `program` once with the given streams and no step limit.
pub fn run_program<R: BufRead, W: Write>(program: &Program, input: R, output: W) -> EvalResult<()> {
    TreeWalker::new(input, output).run(program)
}
