//! Writing merged locale sets back to disk.

use std::fs;
use std::path::Path;

use locmerge_types::{LocaleNode, LocaleSet};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::error::{FsError, FsResult};

/// What a [`save`] call wrote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub countries: usize,
    pub files_written: usize,
    /// Files without parsed content.
    pub files_skipped: usize,
}

/// Serialize a document as tab-indented JSON with a trailing newline.
pub fn render_pretty(node: &LocaleNode) -> FsResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    node.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `set` under `destination` as `<country>/<file>`.
///
/// Directories are created as needed and existing files are overwritten.
/// Files without content are skipped.
pub fn save(set: &LocaleSet, destination: &Path) -> FsResult<SaveSummary> {
    let mut summary = SaveSummary::default();

    for country in set {
        let dir = destination.join(&country.country);
        fs::create_dir_all(&dir).map_err(|e| FsError::io(&dir, e))?;
        summary.countries += 1;

        for file in &country.files {
            let path = dir.join(&file.name);
            let Some(content) = &file.content else {
                warn!(path = %path.display(), "no content to write; skipping");
                summary.files_skipped += 1;
                continue;
            };
            fs::write(&path, render_pretty(content)?).map_err(|e| FsError::io(&path, e))?;
            summary.files_written += 1;
        }
        debug!(country = %country.country, dir = %dir.display(), "country written");
    }

    Ok(summary)
}
