//! Merge engine for locmerge.
//!
//! Reconciles an old locale set against a new one: countries are aligned,
//! files are paired by name, and every pair of documents is merged leaf by
//! leaf with a [`Resolver`](locmerge_resolve::Resolver). The engine is pure;
//! loading and saving live in `locmerge-fs`.
//!
//! # Key Types
//!
//! - [`MergeOptions`] -- Resolver, master country and tracked keys for a run
//! - [`TreeMerger`] / [`TreeMerge`] / [`LeafChange`] -- Single-document merge
//! - [`ChangeLog`] / [`ChangeEntry`] -- The run's change report
//! - [`MergeOutcome`] -- Merged locale set plus its change log

pub mod changelog;
pub mod config;
pub mod country;
pub mod error;
pub mod file;
pub mod siblings;
pub mod tree;

pub use changelog::{ChangeEntry, ChangeLog};
pub use config::{MergeOptions, DEFAULT_REFERENCE_COUNTRY};
pub use country::{align_countries, master_record, reference_diff, Comparison};
pub use error::{EntityKind, MergeError, MergeResult};
pub use file::merge_country_files;
pub use tree::{merge_tree, LeafChange, TreeMerge, TreeMerger};

use locmerge_resolve::ResolverKind;
use locmerge_types::LocaleSet;
use tracing::info;

/// The product of a merge run.
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    /// Mirrors the old set's countries and files.
    pub result: LocaleSet,
    pub log: ChangeLog,
}

/// Merge `old` against `new` according to `options`.
///
/// Under `combine`, the reference country's old/new diff is computed once up
/// front and becomes the comparison record of every country. With a master
/// country, that country's new record is the comparison record of every
/// country. Otherwise countries are compared with their namesakes.
pub fn merge_locales(
    old: &LocaleSet,
    new: &LocaleSet,
    options: &MergeOptions,
) -> MergeResult<MergeOutcome> {
    options.validate()?;

    let merger = TreeMerger::new(&options.resolver).with_tracked_keys(&options.tracked_keys);
    let mut log = ChangeLog::new();

    let result = match (options.resolver, options.master_country.as_deref()) {
        (ResolverKind::Combine, _) => {
            let diff = reference_diff(old, new, options.reference_country())?;
            align_countries(old, new, Comparison::Fixed(&diff), &merger, &mut log)?
        }
        (_, Some(master)) => {
            let record = master_record(new, master)?;
            align_countries(old, new, Comparison::Fixed(record), &merger, &mut log)?
        }
        (_, None) => align_countries(old, new, Comparison::SameCountry, &merger, &mut log)?,
    };

    info!(
        resolver = %options.resolver,
        countries = result.len(),
        files = result.file_count(),
        changes = log.len(),
        "merge complete"
    );
    Ok(MergeOutcome { result, log })
}
