//! Locale files, country records and locale sets.
//!
//! A [`LocaleSet`] is everything parsed from one side of a run: one
//! [`CountryRecord`] per country directory, each holding its
//! [`LocaleFile`]s in load order.

use serde::{Deserialize, Serialize};

use crate::node::LocaleNode;

/// One JSON document inside a country.
///
/// `content` is `None` when the document could not be parsed. Files that
/// still have no content after merging are never written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocaleFile {
    pub name: String,
    pub content: Option<LocaleNode>,
}

impl LocaleFile {
    pub fn new(name: impl Into<String>, content: LocaleNode) -> Self {
        Self {
            name: name.into(),
            content: Some(content),
        }
    }

    /// A file whose content could not be loaded.
    pub fn unparsed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: None,
        }
    }
}

/// All files of one country directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub files: Vec<LocaleFile>,
}

impl CountryRecord {
    pub fn new(country: impl Into<String>, files: Vec<LocaleFile>) -> Self {
        Self {
            country: country.into(),
            files,
        }
    }

    /// Find a file by exact (case-sensitive) name.
    pub fn file(&self, name: &str) -> Option<&LocaleFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn file_names(&self) -> Vec<String> {
        self.files.iter().map(|f| f.name.clone()).collect()
    }
}

/// Every country parsed from one side of a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleSet {
    countries: Vec<CountryRecord>,
}

impl LocaleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_countries(countries: Vec<CountryRecord>) -> Self {
        Self { countries }
    }

    pub fn push(&mut self, record: CountryRecord) {
        self.countries.push(record);
    }

    /// Find a country by its code.
    pub fn country(&self, code: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|c| c.country == code)
    }

    /// All country codes, in set order.
    pub fn codes(&self) -> Vec<String> {
        self.countries.iter().map(|c| c.country.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Total number of files across all countries.
    pub fn file_count(&self) -> usize {
        self.countries.iter().map(|c| c.files.len()).sum()
    }
}

impl FromIterator<CountryRecord> for LocaleSet {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self {
            countries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
