//! Runtime error types for the minipas interpreter.

use thiserror::Error;

/// A fatal interpreter error. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The same identifier appears in two declarations.
    #[error("duplicate variable declaration '{0}'")]
    DuplicateDeclaration(String),

    /// An identifier is read, assigned or read into before being declared.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),

    /// Division or modulo by zero, or integer overflow.
    #[error("arithmetic trap: {0}")]
    ArithmeticTrap(String),

    /// A number token that does not fit a 64-bit integer.
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// The input stream ended or did not contain an integer.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The configured step limit was reached.
    #[error("gas exhausted")]
    GasExhausted,

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
