//! Workspace-wide sweep.
//!
//! Walks a directory tree, scans every supported source file, and
//! tolerates per-file failures: a file that cannot be read or scanned
//! is recorded and skipped, never aborting the sweep. Cancellation is
//! cooperative and checked between files, so everything scanned before
//! the flag was raised stays in the store.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::ScanEngine;
use crate::error::Result;
use crate::lang::Language;
use crate::store::FindingStore;

/// Outcome of one sweep.
#[derive(Debug, Default)]
pub struct SweepSummary {
    pub files_scanned: usize,
    pub files_excluded: usize,
    /// Per-file failures (read or scan), with the failure message.
    pub files_failed: Vec<(PathBuf, String)>,
    pub findings: usize,
    pub cancelled: bool,
}

/// Scan every supported file under `root`.
///
/// Respects `.gitignore` via the walker, then the configured exclusion
/// globs (matched against the root-relative path). `cancel` is checked
/// before each file; raising it stops the sweep early with all
/// completed results intact.
pub fn run(
    engine: &ScanEngine,
    store: &mut FindingStore,
    root: &Path,
    cancel: &AtomicBool,
) -> Result<SweepSummary> {
    let exclusions = engine.config().exclusion_patterns();
    let mut summary = SweepSummary::default();

    let walker = ignore::WalkBuilder::new(root).build();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(error = %e, "walk error, skipping entry");
                continue;
            }
        };
        if !entry.file_type().map_or(false, |t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let Some(language) = Language::from_path(path) else {
            continue;
        };

        if cancel.load(Ordering::Relaxed) {
            summary.cancelled = true;
            tracing::info!(scanned = summary.files_scanned, "sweep cancelled");
            break;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if exclusions.iter().any(|p| p.matches_path(relative)) {
            summary.files_excluded += 1;
            continue;
        }

        let document = path.display().to_string();
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(document, error = %e, "unreadable file, skipping");
                summary.files_failed.push((path.to_path_buf(), e.to_string()));
                continue;
            }
        };

        match engine.scan_document(store, &document, language.id(), &text) {
            Ok(findings) => {
                summary.files_scanned += 1;
                summary.findings += findings.len();
                tracing::debug!(document, findings = findings.len(), "scanned");
            }
            Err(e) => {
                summary.files_failed.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn sweeps_supported_files_only() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "app.py", "eval(data)\n");
        write(dir.path(), "chat.ts", "const p = `Hi ${userInput}`;\n");
        write(dir.path(), "README.md", "eval(data)\n");

        let engine = ScanEngine::new(Config::default());
        let mut store = FindingStore::new();
        let cancel = AtomicBool::new(false);
        let summary = run(&engine, &mut store, dir.path(), &cancel).unwrap();

        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.findings, 2);
        assert!(!summary.cancelled);
        assert!(summary.files_failed.is_empty());
    }

    #[test]
    fn exclusion_globs_are_honored() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "app.py", "eval(data)\n");
        write(dir.path(), "vendor/lib.py", "eval(data)\n");

        let config = Config {
            exclude: vec!["vendor/**".into()],
            ..Config::default()
        };
        let engine = ScanEngine::new(config);
        let mut store = FindingStore::new();
        let cancel = AtomicBool::new(false);
        let summary = run(&engine, &mut store, dir.path(), &cancel).unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_excluded, 1);
        assert_eq!(store.document_count(), 1);
    }

    #[test]
    fn pre_raised_cancel_scans_nothing() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "app.py", "eval(data)\n");

        let engine = ScanEngine::new(Config::default());
        let mut store = FindingStore::new();
        let cancel = AtomicBool::new(true);
        let summary = run(&engine, &mut store, dir.path(), &cancel).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.files_scanned, 0);
        assert_eq!(store.document_count(), 0);
    }

    #[test]
    fn clean_files_still_count_as_scanned() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "clean.py", "x = 1\n");

        let engine = ScanEngine::new(Config::default());
        let mut store = FindingStore::new();
        let cancel = AtomicBool::new(false);
        let summary = run(&engine, &mut store, dir.path(), &cancel).unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.findings, 0);
        assert_eq!(store.document_count(), 1);
    }
}
