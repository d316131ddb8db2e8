//! End-to-end integration tests for the editor flow
//!
//! Exercises the complete create -> add -> del -> clear lifecycle over a
//! real file on disk, the way a sequence of CLI invocations would: a
//! fresh Editor per operation, nothing shared but the file.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use upstream_blocks::parse;
use upstream_core::{Editor, Error};
use upstream_fs::NormalizedPath;

/// A fresh editor for each operation, like one process per invocation.
fn editor_for(temp: &TempDir) -> Editor {
    Editor::new(NormalizedPath::new(
        temp.path().join("nginx-upstream-editor/upstream.conf"),
    ))
}

fn file_content(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join("nginx-upstream-editor/upstream.conf")).unwrap()
}

#[test]
fn create_on_fresh_path_yields_empty_block() {
    let temp = TempDir::new().unwrap();

    editor_for(&temp).create().unwrap();

    assert_eq!(file_content(&temp), "upstream servers {\n}\n");
    assert!(editor_for(&temp).list().unwrap().is_empty());
}

#[test]
fn add_then_list_reports_one_entry() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();

    editor_for(&temp).add("127.0.0.1", "8080").unwrap();

    let entries = editor_for(&temp).list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].to_string(), "127.0.0.1:8080");
}

#[test]
fn second_add_of_same_pair_fails_and_file_is_unchanged() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();
    editor_for(&temp).add("127.0.0.1", "8080").unwrap();
    let before = file_content(&temp);

    let err = editor_for(&temp).add("127.0.0.1", "8080").unwrap_err();

    assert!(matches!(err, Error::DuplicateEntry { .. }), "got: {err:?}");
    assert_eq!(file_content(&temp), before);
}

#[test]
fn front_insertion_lists_newest_first() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();

    editor_for(&temp).add("10.0.0.1", "80").unwrap();
    editor_for(&temp).add("10.0.0.2", "81").unwrap();

    let entries = editor_for(&temp).list().unwrap();
    let listed: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
    assert_eq!(listed, vec!["10.0.0.2:81", "10.0.0.1:80"]);
}

#[test]
fn remove_of_absent_pair_fails_and_file_is_unchanged() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();
    editor_for(&temp).add("10.0.0.1", "80").unwrap();
    let before = file_content(&temp);

    let err = editor_for(&temp).remove("10.0.0.9", "1").unwrap_err();

    assert!(matches!(err, Error::EntryNotFound { .. }), "got: {err:?}");
    assert_eq!(file_content(&temp), before);
}

#[test]
fn clear_reports_no_servers_regardless_of_count() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();
    for i in 1..=7 {
        editor_for(&temp)
            .add(&format!("10.0.0.{i}"), &format!("{}", 8000 + i))
            .unwrap();
    }

    editor_for(&temp).clear().unwrap();

    assert!(editor_for(&temp).list().unwrap().is_empty());
    assert_eq!(file_content(&temp), "upstream servers {\n}\n");
}

#[test]
fn repeated_invocations_keep_the_file_well_formed() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();

    editor_for(&temp).add("a", "1").unwrap();
    editor_for(&temp).add("b", "2").unwrap();
    editor_for(&temp).remove("a", "1").unwrap();
    editor_for(&temp).add("c", "3").unwrap();
    editor_for(&temp).remove("b", "2").unwrap();

    // Every intermediate state parsed; the final file still does
    let doc = parse(&file_content(&temp)).unwrap();
    let listed: Vec<String> = doc.entries().iter().map(|e| e.to_string()).collect();
    assert_eq!(listed, vec!["c:3"]);
}

#[test]
fn uniqueness_holds_under_any_add_sequence() {
    let temp = TempDir::new().unwrap();
    editor_for(&temp).create().unwrap();

    let pairs = [("a", "1"), ("b", "2"), ("a", "1"), ("b", "2"), ("c", "3")];
    for (host, port) in pairs {
        // Duplicates fail; everything else lands
        let _ = editor_for(&temp).add(host, port);
    }

    let entries = editor_for(&temp).list().unwrap();
    let mut listed: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
    assert_eq!(listed.len(), 3);
    listed.sort();
    listed.dedup();
    assert_eq!(listed.len(), 3, "duplicate pairs made it into the block");
}

#[test]
fn hand_written_surroundings_survive_the_whole_lifecycle() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("nginx-upstream-editor");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("upstream.conf"),
        "# include for the proxy\nupstream servers {\n}\n# keep this line\n",
    )
    .unwrap();

    editor_for(&temp).add("10.0.0.1", "80").unwrap();
    editor_for(&temp).clear().unwrap();

    assert_eq!(
        file_content(&temp),
        "# include for the proxy\nupstream servers {\n}\n# keep this line\n"
    );
}
