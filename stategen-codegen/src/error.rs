//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Corpus or document parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] stategen_schema::ParseError),

    /// Model validation error.
    #[error("model error: {0}")]
    Model(#[from] stategen_schema::ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
