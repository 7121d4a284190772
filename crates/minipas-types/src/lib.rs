//! Shared types for the minipas toolchain.
//!
//! This crate defines the syntax-tree nodes a parser hands to the
//! interpreter, and the JSON interchange used when the parser runs as a
//! separate program.

mod error;
pub mod ast;

use std::io::Read;

use serde::Deserialize;

pub use error::{TreeError, TreeResult};

impl ast::Program {
    /// Load a program tree from a JSON document.
    ///
    /// Nesting depth is unbounded: every `binary` node costs two levels, so
    /// long operator chains go well past serde_json's default limit. The
    /// stack grows on demand instead.
    pub fn from_json(json: &str) -> TreeResult<Self> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();
        let program = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(program)
    }

    /// Load a program tree from a reader producing JSON.
    pub fn from_reader(mut reader: impl Read) -> TreeResult<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Render the tree as indented JSON.
    pub fn to_json_pretty(&self) -> TreeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
