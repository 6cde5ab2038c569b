//! Hygiene: enforces coding standards at test time
//!
//! Scans the widget's `src/` tree for patterns that panic in the browser,
//! drop errors on the floor, or bypass text escaping. Each pattern has a
//! budget; fix an existing hit before raising one.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the whole WASM instance.
    Budget { pattern: ".unwrap()", max: 0, why: "panics" },
    Budget { pattern: ".expect(", max: 0, why: "panics" },
    Budget { pattern: "panic!(", max: 0, why: "panics" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Silent loss. The discards are unused-argument arms of non-`csr` builds;
    // the `.ok()`s are optional DOM lookups with a fallback.
    Budget { pattern: "let _ =", max: 4, why: "discards a value unseen" },
    Budget { pattern: ".ok()", max: 6, why: "drops an error" },
    // Messages are rendered as text nodes only.
    Budget { pattern: "inner_html", max: 0, why: "bypasses text escaping" },
    // Leaks: the emoji callback and the mounted app live as long as the page.
    Budget { pattern: ".forget()", max: 2, why: "leaks a JS closure or mount" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides dead code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` siblings.
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

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene scan found no src/lib.rs; run from the crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();

    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "`{}` ({}): found {count}, max {}\n{detail}",
                budget.pattern, budget.why, budget.max
            ));
        }
    }

    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn test_modules_live_in_sibling_files() {
    let files = source_files();
    let inline: Vec<&str> = files
        .iter()
        .filter(|f| f.content.contains("mod tests {"))
        .map(|f| f.path.as_str())
        .collect();
    assert!(inline.is_empty(), "use `#[path = \"*_test.rs\"]` siblings instead of inline tests: {inline:?}");
}
