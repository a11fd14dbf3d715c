//! The change log accumulated during a merge run.
//!
//! Every reported leaf transition becomes a [`ChangeEntry`]. The text report
//! groups entries under a country header and a file header, each written
//! once on first touch:
//!
//! ```text
//! us
//! 	common.json
//! 		menu.play: Play | Play now => Play now
//! ```

use std::fmt;

use locmerge_types::LocaleNode;
use serde::Serialize;

use crate::tree::LeafChange;

/// One reported leaf transition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangeEntry {
    pub country: String,
    pub file: String,
    pub path: String,
    pub old: Option<LocaleNode>,
    pub new: Option<LocaleNode>,
    pub resolved: Option<LocaleNode>,
}

/// Append-only record of the changes made by a run.
///
/// A muted log accepts records and discards them; it is used for internal
/// merges whose transitions are not part of the user-visible report.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ChangeLog {
    entries: Vec<ChangeEntry>,
    #[serde(skip)]
    muted: bool,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that discards everything recorded into it.
    pub fn muted() -> Self {
        Self {
            entries: Vec::new(),
            muted: true,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Record the leaf changes of one file.
    pub fn record_file(&mut self, country: &str, file: &str, changes: Vec<LeafChange>) {
        if self.muted {
            return;
        }
        self.entries.extend(changes.into_iter().map(|change| ChangeEntry {
            country: country.to_string(),
            file: file.to_string(),
            path: change.path,
            old: change.old,
            new: change.new,
            resolved: change.resolved,
        }));
    }

    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_country_changes(&self, country: &str) -> bool {
        self.entries.iter().any(|e| e.country == country)
    }

    pub fn has_file_changes(&self, country: &str, file: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.country == country && e.file == file)
    }

    /// Countries with at least one change, in first-touch order.
    pub fn touched_countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !countries.contains(&entry.country.as_str()) {
                countries.push(entry.country.as_str());
            }
        }
        countries
    }

    /// Render the plain-text report.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render the entries as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ChangeLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut country: Option<&str> = None;
        let mut file: Option<&str> = None;
        for entry in &self.entries {
            if country != Some(entry.country.as_str()) {
                writeln!(f, "{}", entry.country)?;
                country = Some(entry.country.as_str());
                file = None;
            }
            if file != Some(entry.file.as_str()) {
                writeln!(f, "\t{}", entry.file)?;
                file = Some(entry.file.as_str());
            }
            writeln!(
                f,
                "\t\t{}: {} | {} => {}",
                entry.path,
                ReportValue(entry.old.as_ref()),
                ReportValue(entry.new.as_ref()),
                ReportValue(entry.resolved.as_ref()),
            )?;
        }
        Ok(())
    }
}

struct ReportValue<'a>(Option<&'a LocaleNode>);

impl fmt::Display for ReportValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(f, "{node}"),
            None => f.write_str("(none)"),
        }
    }
}
