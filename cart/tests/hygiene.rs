//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the cart crate's production sources (`src/`, minus the
//! `*_test.rs` files) for antipatterns. Each has a budget, ideally zero. If you
//! must add one, fix an existing one first. The budget never grows.
//!
//! Two layout rules are checked as well: only `storage.rs` may talk to the
//! browser, and storage keys are spelled out only in `consts.rs`.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics: a failed cart write must surface as an error, not crash the page.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss: a discarded storage error is a lost cart.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    name: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { name, content });
        }
    }
}

/// Per-file count of lines containing `pattern`, skipping files in `exempt`.
fn hits(files: &[SourceFile], pattern: &str, exempt: &[&str]) -> Vec<(String, usize)> {
    files
        .iter()
        .filter(|file| !exempt.contains(&file.name.as_str()))
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.name.clone(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str, max: usize, exempt: &[&str]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the cart crate root");
    let found = hits(&files, pattern, exempt);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(name, c)| format!("  {name}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= max, "`{pattern}` budget exceeded: found {count}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", MAX_UNWRAP, &[]);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", MAX_EXPECT, &[]);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", MAX_PANIC, &[]);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", MAX_UNREACHABLE, &[]);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", MAX_TODO, &[]);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", MAX_UNIMPLEMENTED, &[]);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", MAX_SILENT_DISCARD, &[]);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", MAX_DOT_OK, &[]);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE, &[]);
}

#[test]
fn browser_access_stays_in_storage_module() {
    assert_budget("web_sys::", 0, &["storage.rs"]);
}

#[test]
fn storage_keys_stay_in_consts() {
    assert_budget("\"cart\"", 0, &["consts.rs"]);
    assert_budget("\"cart.corrupt\"", 0, &["consts.rs"]);
}
