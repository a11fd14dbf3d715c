//! Error types for the resolve crate.

/// Errors that can occur while selecting a resolver.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The requested name is not part of the catalogue.
    #[error("unknown resolver '{name}' (expected one of: {choices})")]
    UnknownResolver { name: String, choices: String },
}
