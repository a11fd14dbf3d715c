//! Error types for the merge crate.

use std::fmt;

/// What kind of record a lookup was searching for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Country,
    File,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country => f.write_str("country"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Errors that abort a merge run.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// A country or file had no counterpart where one was required.
    #[error(
        "no {kind} found: '{name}'{} (available: {})",
        in_country(.country),
        available_list(.available)
    )]
    NotFound {
        kind: EntityKind,
        name: String,
        /// The country searched, for file lookups.
        country: Option<String>,
        available: Vec<String>,
    },

    /// The merge options are invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MergeError {
    pub fn country_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::NotFound {
            kind: EntityKind::Country,
            name: name.into(),
            country: None,
            available,
        }
    }

    pub fn file_not_found(
        name: impl Into<String>,
        country: impl Into<String>,
        available: Vec<String>,
    ) -> Self {
        Self::NotFound {
            kind: EntityKind::File,
            name: name.into(),
            country: Some(country.into()),
            available,
        }
    }
}

fn in_country(country: &Option<String>) -> String {
    match country {
        Some(code) => format!(" in country '{code}'"),
        None => String::new(),
    }
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() {
        "none".to_string()
    } else {
        available.join(", ")
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
