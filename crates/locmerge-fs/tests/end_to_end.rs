//! Load two locale roots, merge them and write the result back out.

use std::fs;
use std::path::Path;

use locmerge_fs::{load, save, write_report};
use locmerge_merge::{merge_locales, MergeOptions};
use locmerge_resolve::ResolverKind;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read(root: &Path, rel: &str) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(root.join(rel)).unwrap()).unwrap()
}

fn fixture(root: &Path) {
    write(
        root,
        "locales/us/common.json",
        r#"{"menu": {"play": "Play", "quit": "Quit", "legacy": "Old"}, "levels": ["One", "Two"]}"#,
    );
    write(
        root,
        "locales/de/common.json",
        r#"{"menu": {"play": "Spielen", "quit": "Beenden", "legacy": "Alt"}, "levels": ["Eins", "Zwei"]}"#,
    );
    write(
        root,
        "newLocales/us/common.json",
        r#"{"menu": {"play": "Play now", "quit": "Quit", "help": "Help"}, "levels": ["One", "Two", "Three"]}"#,
    );
    write(
        root,
        "newLocales/de/common.json",
        r#"{"menu": {"play": "Jetzt spielen", "quit": "Beenden", "help": "Hilfe"}, "levels": ["Eins", "Zwei", "Drei"]}"#,
    );
}

#[test]
fn sync_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let loaded = load(&dir.path().join("locales"), &dir.path().join("newLocales")).unwrap();
    let outcome =
        merge_locales(&loaded.old, &loaded.new, &MergeOptions::new(ResolverKind::Sync)).unwrap();

    let out = dir.path().join("resultLocales");
    let summary = save(&outcome.result, &out).unwrap();
    assert_eq!(summary.files_written, 2);

    assert_eq!(
        read(&out, "de/common.json"),
        serde_json::json!({
            "menu": {"play": "Spielen", "quit": "Beenden", "help": "Hilfe"},
            "levels": ["Eins", "Zwei", "Drei"]
        })
    );

    let text = fs::read_to_string(out.join("us/common.json")).unwrap();
    assert!(text.starts_with("{\n\t\"menu\": {\n\t\t\"play\": \"Play\""));

    let report = dir.path().join("log.yaml");
    write_report(&outcome.log, &report).unwrap();
    let report = fs::read_to_string(report).unwrap();
    assert!(report.contains("\t\tmenu.legacy: Alt | (none) => (none)\n"));
    assert!(report.contains("\t\tlevels.2: (none) | Drei => Drei\n"));
}

#[test]
fn combine_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());

    let loaded = load(&dir.path().join("locales"), &dir.path().join("newLocales")).unwrap();
    let outcome =
        merge_locales(&loaded.old, &loaded.new, &MergeOptions::new(ResolverKind::Combine)).unwrap();

    let out = dir.path().join("resultLocales");
    save(&outcome.result, &out).unwrap();

    assert_eq!(
        read(&out, "de/common.json"),
        serde_json::json!({
            "menu": {"play": "Play now", "quit": "Beenden", "legacy": "Alt", "help": "Help"},
            "levels": ["Eins", "Zwei", "Three"]
        })
    );
}

#[test]
fn broken_old_file_takes_new_document() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path());
    write(dir.path(), "locales/de/extra.json", "{ not json");
    write(dir.path(), "newLocales/de/extra.json", r#"{"k": "v"}"#);

    let loaded = load(&dir.path().join("locales"), &dir.path().join("newLocales")).unwrap();

    let outcome =
        merge_locales(&loaded.old, &loaded.new, &MergeOptions::new(ResolverKind::Add)).unwrap();
    let out = dir.path().join("added");
    let summary = save(&outcome.result, &out).unwrap();
    assert_eq!(summary.files_skipped, 0);
    assert_eq!(read(&out, "de/extra.json"), serde_json::json!({"k": "v"}));
    assert!(outcome.log.has_file_changes("de", "extra.json"));

    let outcome =
        merge_locales(&loaded.old, &loaded.new, &MergeOptions::new(ResolverKind::Filter)).unwrap();
    let out = dir.path().join("filtered");
    let summary = save(&outcome.result, &out).unwrap();
    assert_eq!(summary.files_skipped, 1);
    assert!(!out.join("de/extra.json").exists());
}
