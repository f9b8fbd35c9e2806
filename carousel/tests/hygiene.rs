//! Hygiene: enforces coding standards at test time.
//!
//! These tests scan the carousel crate source tree for antipatterns that
//! violate project standards. Each has a budget (ideally zero). If you must
//! add one, you have to fix an existing one first. The budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` for every scanned antipattern.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: these abort the wasm instance.
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "stub"),
    ("unimplemented!(", 0, "stub"),
    // Silent loss: discards errors without inspecting.
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "silent discard"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "dead code"),
];

/// Only the host may reach into the browser; everything else is clock-injected.
const HOST_ONLY: &[&str] = &["web_sys::", "js_sys::", "gloo_timers::", "wasm_bindgen"];
const HOST_FILE: &str = "host.rs";

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `carousel/src/`, excluding test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source<'a>(files: impl Iterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn scans_some_sources() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the carousel crate root");
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits = count_in_source(files.iter(), pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{pattern} ({why}): found {count}, max {budget}\n{}", format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn browser_apis_stay_in_host() {
    let files = source_files();
    let core = files.iter().filter(|f| !f.path.ends_with(HOST_FILE));
    let core: Vec<&SourceFile> = core.collect();
    for pattern in HOST_ONLY {
        let hits = count_in_source(core.iter().copied(), pattern);
        assert!(hits.is_empty(), "{pattern} used outside {HOST_FILE}:\n{}", format_hits(&hits));
    }
}

fn host_source() -> SourceFile {
    source_files().into_iter().find(|f| f.path.ends_with(HOST_FILE)).expect("host.rs present")
}

#[test]
fn listeners_detach_when_dropped() {
    let host = host_source();
    assert!(
        host.content.contains("impl Drop for Listener"),
        "a listener dropped on a failed attach must unregister itself"
    );
}

#[test]
fn layout_reads_go_through_force_layout() {
    let host = host_source();
    assert!(host.content.contains("fn force_layout("));
    let reads = host.content.lines().filter(|line| line.contains(".offset_height()")).count();
    assert_eq!(reads, 1, "read layout only inside force_layout");
}
