// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use super::discovery::{ScanOptions, candidate_files, mod_folders};
use super::{
    AttributeStore, FileReader, FsReader, LogNotifier, MemoryStore, Notification,
    NotificationKind, Notifier,
};
use crate::metadata::{AttributeKey, ModAttributes};

#[test]
fn test_memory_store_default_for_unknown() {
    let store = MemoryStore::new();
    assert_eq!(store.get("nobody", AttributeKey::OnlineVersion, "-"), "-");
}

#[test]
fn test_memory_store_last_write_wins() {
    let store = MemoryStore::new();
    store.set("starsector", "lazylib", AttributeKey::OnlineVersion, "2.8");
    store.set("starsector", "lazylib", AttributeKey::OnlineVersion, "2.8b");

    assert_eq!(
        store.get("lazylib", AttributeKey::OnlineVersion, ""),
        "2.8b"
    );
}

#[test]
fn test_memory_store_insert_mod_merges() {
    let store = MemoryStore::new();
    store.set("starsector", "lazylib", AttributeKey::LastUpdateTime, "1");

    let read: ModAttributes = [
        (AttributeKey::ModSharedId, "lazylib".to_string()),
        (AttributeKey::DisplayVersion, "2.8b".to_string()),
    ]
    .into_iter()
    .collect();
    store.insert_mod("starsector", "lazylib", &read);

    let stored = store.attributes("starsector", "lazylib").unwrap();
    assert_eq!(stored.iter().count(), 3);
    assert_eq!(stored.get(AttributeKey::LastUpdateTime), Some("1"));
    assert_eq!(stored.get(AttributeKey::DisplayVersion), Some("2.8b"));
    assert!(store.attributes("other-game", "lazylib").is_none());
}

#[test]
fn test_log_notifier_ids() {
    let notifier = LogNotifier::new();

    let first = notifier.post(Notification::success("done"));
    let second = notifier.post(Notification::warning("careful"));
    let keyed = notifier.post(Notification::progress("update-check", "checking", 50));

    assert_eq!(first, "notification-1");
    assert_eq!(second, "notification-2");
    assert_eq!(keyed, "update-check");
    notifier.dismiss(&keyed);
}

#[test]
fn test_notification_constructors() {
    let progress = Notification::progress("id", "msg", 75);
    assert_eq!(progress.kind, NotificationKind::Progress);
    assert_eq!(progress.percent, Some(75));

    let warning = Notification::warning("w");
    assert_eq!(warning.id, None);
    assert_eq!(warning.percent, None);
}

#[test]
fn test_fs_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mod_info.json");
    std::fs::write(&path, "{}").unwrap();

    assert_eq!(FsReader.read_text(&path).unwrap(), "{}");
    assert!(FsReader.read_text(&dir.path().join("missing")).is_err());
}

#[test]
fn test_candidate_files_shallow_first() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("data/config")).unwrap();
    fs::write(root.join("data/config/mod_info.json"), "{}").unwrap();
    fs::write(root.join("mod_info.json"), "{}").unwrap();
    fs::write(root.join("a.version"), "{}").unwrap();

    let files = candidate_files(root, &ScanOptions::default()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(
        relative,
        vec!["a.version", "mod_info.json", "data/config/mod_info.json"]
    );
}

#[test]
fn test_candidate_files_respects_max_depth() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("jars")).unwrap();
    fs::write(dir.path().join("jars/mod.jar"), "").unwrap();
    fs::write(dir.path().join("mod_info.json"), "{}").unwrap();

    let options = ScanOptions::builder().with_max_depth(1).build();
    let files = candidate_files(dir.path(), &options).unwrap();
    assert_eq!(files, vec![dir.path().join("mod_info.json")]);
}

#[test]
fn test_candidate_files_missing_folder() {
    let dir = tempfile::tempdir().unwrap();
    assert!(candidate_files(&dir.path().join("nope"), &ScanOptions::default()).is_err());
}

#[test]
fn test_mod_folders_lists_directories_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("Nexerelin")).unwrap();
    fs::create_dir(dir.path().join("LazyLib")).unwrap();
    fs::write(dir.path().join("enabled_mods.json"), "{}").unwrap();

    let folders = mod_folders(dir.path()).unwrap();
    assert_eq!(
        folders,
        vec![dir.path().join("LazyLib"), dir.path().join("Nexerelin")]
    );
}
