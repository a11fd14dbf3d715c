//! File alignment within one country pair.

use locmerge_types::{CountryRecord, LocaleFile};
use tracing::debug;

use crate::changelog::ChangeLog;
use crate::error::{MergeError, MergeResult};
use crate::tree::TreeMerger;

/// Merge every file of `old` against the file of the same name in
/// `comparison`.
///
/// The result keeps `old`'s country code and file order. A file of `old`
/// with no namesake in `comparison` aborts with [`MergeError::NotFound`].
/// When the comparison file has no parsed content the old content is kept
/// as is. When the old file has none, the new document is handed to the
/// resolver whole.
pub fn merge_country_files(
    old: &CountryRecord,
    comparison: &CountryRecord,
    merger: &TreeMerger<'_>,
    log: &mut ChangeLog,
) -> MergeResult<CountryRecord> {
    let mut files = Vec::with_capacity(old.files.len());

    for old_file in &old.files {
        let counterpart = comparison.file(&old_file.name).ok_or_else(|| {
            MergeError::file_not_found(&old_file.name, &old.country, comparison.file_names())
        })?;

        let merged = match (&old_file.content, &counterpart.content) {
            (Some(_), None) => {
                debug!(
                    country = %old.country,
                    file = %old_file.name,
                    "no comparison content; keeping old"
                );
                files.push(old_file.clone());
                continue;
            }
            (Some(old_content), new_content) => {
                merger.merge(old_content, new_content.as_ref())
            }
            (None, new_content) => merger.merge_absent(new_content.as_ref()),
        };

        debug!(
            country = %old.country,
            file = %old_file.name,
            resolver = merger.resolver().name(),
            changes = merged.changes.len(),
            "file merged"
        );
        log.record_file(&old.country, &old_file.name, merged.changes);
        files.push(LocaleFile {
            name: old_file.name.clone(),
            content: merged.merged,
        });
    }

    Ok(CountryRecord::new(old.country.clone(), files))
}
