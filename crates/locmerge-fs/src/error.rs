//! Error types for the fs crate.

use std::path::PathBuf;

/// Errors that can occur while loading or saving locale trees.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// A locale root is missing or is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Reading or writing a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Walking a locale root failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A merged tree could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for fs results.
pub type FsResult<T> = Result<T, FsError>;
