//! File-system collaborators for locmerge.
//!
//! Locale roots are laid out as one sub-directory per country holding that
//! country's `*.json` files:
//!
//! ```text
//! locales/
//!   us/common.json
//!   us/play.json
//!   de/common.json
//! ```
//!
//! # Key Types
//!
//! - [`load`] / [`load_locale_set`] -- Parse locale roots into locale sets
//! - [`save`] / [`SaveSummary`] -- Write a merged set as tab-indented JSON
//! - [`write_report`] -- Persist the change report

pub mod error;
pub mod loader;
pub mod report;
pub mod writer;

pub use error::{FsError, FsResult};
pub use loader::{is_locale_file, load, load_locale_set, LoadedLocales};
pub use report::write_report;
pub use writer::{render_pretty, save, SaveSummary};
