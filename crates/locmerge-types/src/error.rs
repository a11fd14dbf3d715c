use thiserror::Error;

/// Errors produced by locale tree operations.
#[derive(Debug, Error)]
pub enum TypeError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
