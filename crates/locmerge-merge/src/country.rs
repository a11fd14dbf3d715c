//! Country alignment: choose what each old country is compared against.

use locmerge_resolve::ResolverKind;
use locmerge_types::{CountryRecord, LocaleSet};
use tracing::debug;

use crate::changelog::ChangeLog;
use crate::error::{MergeError, MergeResult};
use crate::file::merge_country_files;
use crate::tree::TreeMerger;

/// Where each old country finds its comparison record.
#[derive(Clone, Copy, Debug)]
pub enum Comparison<'a> {
    /// The new country with the same code; countries without one pass
    /// through unmerged.
    SameCountry,
    /// One fixed record used for every old country.
    Fixed(&'a CountryRecord),
}

impl<'a> Comparison<'a> {
    fn lookup(self, new: &'a LocaleSet, country: &str) -> Option<&'a CountryRecord> {
        match self {
            Self::SameCountry => new.country(country),
            Self::Fixed(record) => Some(record),
        }
    }
}

/// Compute the diff between the old and new records of `reference`.
///
/// The result holds, per file, only the leaves the new side added or
/// changed. Its transitions are not reported.
pub fn reference_diff(
    old: &LocaleSet,
    new: &LocaleSet,
    reference: &str,
) -> MergeResult<CountryRecord> {
    let old_reference = old
        .country(reference)
        .ok_or_else(|| MergeError::country_not_found(reference, old.codes()))?;
    let new_reference = new
        .country(reference)
        .ok_or_else(|| MergeError::country_not_found(reference, new.codes()))?;

    let merger = TreeMerger::new(&ResolverKind::Diff);
    let diff = merge_country_files(old_reference, new_reference, &merger, &mut ChangeLog::muted())?;
    debug!(country = reference, files = diff.files.len(), "reference diff computed");
    Ok(diff)
}

/// Look up the new-side record of a master country.
pub fn master_record<'a>(new: &'a LocaleSet, master: &str) -> MergeResult<&'a CountryRecord> {
    new.country(master)
        .ok_or_else(|| MergeError::country_not_found(master, new.codes()))
}

/// Merge every old country against its comparison record.
///
/// The result mirrors `old`: same countries, same order. Countries without
/// a comparison record are copied unchanged.
pub fn align_countries(
    old: &LocaleSet,
    new: &LocaleSet,
    comparison: Comparison<'_>,
    merger: &TreeMerger<'_>,
    log: &mut ChangeLog,
) -> MergeResult<LocaleSet> {
    let mut result = LocaleSet::new();
    for old_country in old {
        match comparison.lookup(new, &old_country.country) {
            Some(record) => {
                debug!(
                    country = %old_country.country,
                    against = %record.country,
                    "merging country"
                );
                result.push(merge_country_files(old_country, record, merger, log)?);
            }
            None => {
                debug!(country = %old_country.country, "no counterpart; passing through");
                result.push(old_country.clone());
            }
        }
    }
    Ok(result)
}
