//! End-to-end integration tests demonstrating the test harness.
//!
//! These walk through the shopping-list example: a note is created, tagged,
//! renamed and finally deleted, with the index checked after every step
//! through the library and through the binary.

mod common;

use common::harness::{TestEnv, TestNote};
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use quick_notes::index::NoteIndex;
use std::collections::BTreeSet;
use std::path::PathBuf;

fn load(env: &TestEnv) -> NoteIndex {
    let (index, result) = NoteIndex::load(env.notes_dir(), "md").expect("Should load index");
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    index
}

fn tagged(index: &NoteIndex, tag: &str) -> BTreeSet<PathBuf> {
    index.paths_for_tag(tag).cloned().unwrap_or_default()
}

#[test]
fn test_shopping_list_lifecycle() {
    let env = TestEnv::new();
    let shopping = env.add_note(&TestNote::new("Shopping List").tag("errands").tag("home"));

    let index = load(&env);
    assert_eq!(index.path_for_name("Shopping List"), Some(shopping.as_path()));
    assert_eq!(tagged(&index, "errands"), BTreeSet::from([shopping.clone()]));
    assert_eq!(tagged(&index, "home"), BTreeSet::from([shopping.clone()]));

    // Retag: errands is dropped, urgent is added
    env.write_file(
        "shopping_list.md",
        &TestNote::new("Shopping List").tag("home").tag("urgent").render(),
    );
    let index = load(&env);
    assert!(index.paths_for_tag("errands").is_none());
    assert_eq!(tagged(&index, "urgent"), BTreeSet::from([shopping.clone()]));

    // Rename: the file follows the name
    env.write_file(
        "shopping_list.md",
        &TestNote::new("Groceries").tag("home").render(),
    );
    let index = load(&env);
    let groceries = env.notes_dir().join("groceries.md");
    assert!(!shopping.exists());
    assert_eq!(index.path_for_name("Groceries"), Some(groceries.as_path()));
    assert!(index.path_for_name("Shopping List").is_none());

    // Delete through the binary
    env.cmd().args(["delete", "Groceries"]).assert().success();
    let index = load(&env);
    assert!(index.is_empty());
    assert!(index.tags().is_empty());
}

#[test]
fn test_ls_matches_library_view() {
    let env = TestEnv::new();
    env.add_note(&TestNote::new("Rust Tips").tag("rust"));
    env.add_note(&TestNote::new("Car Service").tag("errands"));

    let index = load(&env);
    let expected: Vec<String> = index.notes().keys().map(|p| p.display().to_string()).collect();

    let out = env.cmd().ls().format_paths().output_success();
    let mut listed: Vec<String> = out.lines().map(str::to_string).collect();
    listed.sort();

    assert_eq!(listed, expected);
}

#[test]
fn test_find_after_index() {
    let env = TestEnv::new();
    env.add_note(&TestNote::new("Weekend Plans").tag("home").body("hike the ridge\n"));

    env.cmd().index().assert().success();

    env.cmd()
        .find("vc ridge")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend Plans"))
        .stdout(predicate::str::contains("3: hike the ridge"));
}
