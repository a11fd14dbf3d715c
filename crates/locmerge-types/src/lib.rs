//! Foundation types for locmerge.
//!
//! This crate provides the in-memory model of a localization tree. Every
//! other locmerge crate depends on `locmerge-types`.
//!
//! # Key Types
//!
//! - [`LocaleLeaf`] -- An opaque scalar translation value (or `null`)
//! - [`LocaleNode`] -- Tagged tree node: `Leaf` or `Node(Mapping)`
//! - [`Mapping`] -- Insertion-ordered children of a node
//! - [`LocaleFile`] -- One parsed JSON document inside a country
//! - [`CountryRecord`] -- All files of one country directory
//! - [`LocaleSet`] -- Every country parsed from one side of a run

pub mod error;
pub mod node;
pub mod record;

pub use error::{TypeError, TypeResult};
pub use node::{is_nullish, LocaleLeaf, LocaleNode, Mapping};
pub use record::{CountryRecord, LocaleFile, LocaleSet};
