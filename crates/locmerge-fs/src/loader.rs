//! Loading locale roots from disk.
//!
//! Every immediate sub-directory of a root is a country; every `*.json`
//! file directly inside it is a locale file. Entries are visited in file
//! name order so runs are reproducible. A file that is not valid UTF-8 JSON
//! is logged and kept without content; it never aborts the load.

use std::fs;
use std::path::Path;

use locmerge_types::{CountryRecord, LocaleFile, LocaleNode, LocaleSet};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{FsError, FsResult};

/// Both sides of a run.
#[derive(Clone, Debug)]
pub struct LoadedLocales {
    pub old: LocaleSet,
    pub new: LocaleSet,
}

/// Load the old (`source`) and new (`target`) roots concurrently.
pub fn load(source: &Path, target: &Path) -> FsResult<LoadedLocales> {
    let (old, new) = std::thread::scope(|scope| {
        let old = scope.spawn(|| load_locale_set(source));
        let new = load_locale_set(target);
        let old = old
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        (old, new)
    });
    Ok(LoadedLocales { old: old?, new: new? })
}

/// Load one locale root.
pub fn load_locale_set(root: &Path) -> FsResult<LocaleSet> {
    if !root.is_dir() {
        return Err(FsError::NotADirectory(root.to_path_buf()));
    }

    let mut set = LocaleSet::new();
    for entry in children(root) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let country = entry.file_name().to_string_lossy().into_owned();
        let record = load_country(country, entry.path())?;
        debug!(country = %record.country, files = record.files.len(), "country loaded");
        set.push(record);
    }
    Ok(set)
}

/// Returns `true` for file names ending in `.json`, ignoring case.
pub fn is_locale_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn children(dir: &Path) -> walkdir::IntoIter {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

fn load_country(country: String, dir: &Path) -> FsResult<CountryRecord> {
    let mut files = Vec::new();
    for entry in children(dir) {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() || !is_locale_file(&name) {
            continue;
        }
        files.push(read_locale_file(name, entry.path())?);
    }
    Ok(CountryRecord::new(country, files))
}

fn read_locale_file(name: String, path: &Path) -> FsResult<LocaleFile> {
    let bytes = fs::read(path).map_err(|e| FsError::io(path, e))?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "locale file is not UTF-8; skipping content");
            return Ok(LocaleFile::unparsed(name));
        }
    };

    match LocaleNode::from_json_str(text.trim_start_matches('\u{feff}')) {
        Ok(content) => Ok(LocaleFile::new(name, content)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "invalid locale JSON; skipping content");
            Ok(LocaleFile::unparsed(name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn json_extension_filter() {
        assert!(is_locale_file("common.json"));
        assert!(is_locale_file("COMMON.JSON"));
        assert!(!is_locale_file("index.js"));
        assert!(!is_locale_file("json"));
        assert!(!is_locale_file("notes.json.bak"));
    }

    #[test]
    fn loads_countries_and_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "us/play.json", r#"{"title": "Play"}"#);
        write(dir.path(), "us/common.json", r#"{"ok": "OK"}"#);
        write(dir.path(), "us/index.js", "export default {}");
        write(dir.path(), "ar/common.json", r#"{"ok": "حسنا"}"#);
        write(dir.path(), "README.md", "not a country");

        let set = load_locale_set(dir.path()).unwrap();
        assert_eq!(set.codes(), vec!["ar", "us"]);
        let us = set.country("us").unwrap();
        assert_eq!(us.file_names(), vec!["common.json", "play.json"]);
        assert_eq!(
            us.file("play.json").unwrap().content,
            Some(LocaleNode::from(serde_json::json!({"title": "Play"})))
        );
    }

    #[test]
    fn unparseable_files_are_kept_without_content() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "us/broken.json", "{\"a\": ");
        write(dir.path(), "us/good.json", "\u{feff}\n  {\"a\": 1}\n\n");
        fs::write(dir.path().join("us/binary.json"), [0xff, 0xfe, 0x00]).unwrap();

        let set = load_locale_set(dir.path()).unwrap();
        let us = set.country("us").unwrap();
        assert_eq!(us.file("broken.json").unwrap().content, None);
        assert_eq!(us.file("binary.json").unwrap().content, None);
        assert!(us.file("good.json").unwrap().content.is_some());
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_locale_set(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
    }

    #[test]
    fn loads_both_sides() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "old/us/a.json", "{}");
        write(dir.path(), "new/us/a.json", "{}");
        write(dir.path(), "new/de/a.json", "{}");

        let loaded = load(&dir.path().join("old"), &dir.path().join("new")).unwrap();
        assert_eq!(loaded.old.codes(), vec!["us"]);
        assert_eq!(loaded.new.codes(), vec!["de", "us"]);
    }
}
