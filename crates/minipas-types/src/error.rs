use thiserror::Error;

/// Failure to load or store a syntax tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The document is not a well-formed tree.
    #[error("invalid syntax tree: {0}")]
    Json(#[from] serde_json::Error),

    /// The tree could not be read.
    #[error("cannot read syntax tree: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for tree interchange.
pub type TreeResult<T> = Result<T, TreeError>;
