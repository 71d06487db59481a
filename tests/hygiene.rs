//! Hygiene budgets for production sources.
//!
//! Scans `src/` (excluding `*_test.rs`) for calls that can panic in the page
//! or silently drop a host failure. Every budget is zero; UI helpers log and
//! degrade instead.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    label: &'static str,
    pattern: &'static str,
    max: usize,
}

const PANICS: &[Budget] = &[
    Budget { label: ".unwrap()", pattern: ".unwrap()", max: 0 },
    Budget { label: ".expect()", pattern: ".expect(", max: 0 },
    Budget { label: "panic!()", pattern: "panic!(", max: 0 },
    Budget { label: "unreachable!()", pattern: "unreachable!(", max: 0 },
    Budget { label: "todo!()", pattern: "todo!(", max: 0 },
    Budget { label: "unimplemented!()", pattern: "unimplemented!(", max: 0 },
];

const SILENT_LOSS: &[Budget] = &[
    Budget { label: "let _ =", pattern: "let _ =", max: 0 },
    Budget { label: ".ok()", pattern: ".ok()", max: 0 },
    Budget { label: "#[allow(dead_code)]", pattern: "#[allow(dead_code)]", max: 0 },
];

fn production_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budgets: &[Budget]) {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for budget in budgets {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|(path, content)| {
                let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
                (count > 0).then(|| (path.display().to_string(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > budget.max {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("  {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("{} budget exceeded: found {total}, max {}\n{detail}", budget.label, budget.max));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_loss_budgets() {
    check(SILENT_LOSS);
}
