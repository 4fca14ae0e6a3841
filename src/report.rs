//! Cross-file security report.
//!
//! A report is a pure fold over the store's current contents. Nothing
//! is maintained incrementally, and generation never fails (an empty
//! store folds to zero counts and empty maps). Report content is
//! presentation-agnostic; rendering lives in `crate::output`.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::rules::Severity;
use crate::store::FindingStore;

#[derive(Debug, Clone, Serialize)]
pub struct SecurityReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Documents with a recorded scan, including zero-finding scans.
    /// A clean file that was scanned and then explicitly cleared does
    /// not count.
    pub files_scanned: usize,
    pub total_issues: usize,
    /// Error-severity findings (blocking-grade).
    pub critical_count: usize,
    pub warning_count: usize,
    pub by_code: BTreeMap<String, CodeSummary>,
    /// Only documents with at least one finding appear here.
    pub by_file: BTreeMap<String, FileSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeSummary {
    pub count: usize,
    pub severity: Severity,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileSummary {
    pub display_name: String,
    pub issues: Vec<FileIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileIssue {
    pub code: String,
    pub message: String,
    pub line: u32,
    pub severity: Severity,
}

/// Fold the store into a report. Read-only; safe to call at any time.
pub fn generate(store: &FindingStore) -> SecurityReport {
    let mut total_issues = 0;
    let mut critical_count = 0;
    let mut warning_count = 0;
    let mut by_code: BTreeMap<String, CodeSummary> = BTreeMap::new();
    let mut by_file: BTreeMap<String, FileSummary> = BTreeMap::new();

    for (document, findings) in store.documents() {
        if findings.is_empty() {
            continue;
        }

        let mut issues = Vec::with_capacity(findings.len());
        for f in findings {
            total_issues += 1;
            match f.severity {
                Severity::Error => critical_count += 1,
                Severity::Warning => warning_count += 1,
            }

            by_code
                .entry(f.code.clone())
                .and_modify(|s| s.count += 1)
                .or_insert_with(|| CodeSummary {
                    count: 1,
                    severity: f.severity,
                    description: f.message.clone(),
                });

            issues.push(FileIssue {
                code: f.code.clone(),
                message: f.message.clone(),
                line: f.line,
                severity: f.severity,
            });
        }

        by_file.insert(
            document.to_string(),
            FileSummary {
                display_name: display_name(document),
                issues,
            },
        );
    }

    SecurityReport {
        run_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        files_scanned: store.document_count(),
        total_issues,
        critical_count,
        warning_count,
        by_code,
        by_file,
    }
}

fn display_name(document: &str) -> String {
    Path::new(document)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, Finding};
    use pretty_assertions::assert_eq;

    fn finding(document: &str, line: u32, code: &str, severity: Severity) -> Finding {
        Finding {
            document: document.into(),
            line,
            column: 0,
            length: 4,
            code: code.into(),
            rule_name: "Test".into(),
            category: Category::PromptInjection,
            severity,
            message: format!("{} fired", code),
            documentation: "fix it".into(),
        }
    }

    #[test]
    fn empty_store_yields_zero_report() {
        let store = FindingStore::new();
        let report = generate(&store);
        assert_eq!(report.files_scanned, 0);
        assert_eq!(report.total_issues, 0);
        assert_eq!(report.critical_count, 0);
        assert_eq!(report.warning_count, 0);
        assert!(report.by_code.is_empty());
        assert!(report.by_file.is_empty());
    }

    #[test]
    fn aggregates_counts_across_documents() {
        let mut store = FindingStore::new();
        store.replace(
            "src/chat.py",
            vec![
                finding("src/chat.py", 3, "BST001", Severity::Error),
                finding("src/chat.py", 8, "BST010", Severity::Error),
                finding("src/chat.py", 12, "BST020", Severity::Warning),
            ],
            "h1".into(),
        );
        store.replace(
            "src/tools.py",
            vec![finding("src/tools.py", 1, "BST060", Severity::Error)],
            "h2".into(),
        );

        let report = generate(&store);
        assert_eq!(report.total_issues, 4);
        assert_eq!(report.critical_count, 3);
        assert_eq!(report.warning_count, 1);
        assert_eq!(report.files_scanned, 2);

        let by_code_total: usize = report.by_code.values().map(|s| s.count).sum();
        assert_eq!(by_code_total, 4);
        assert_eq!(report.by_code["BST001"].severity, Severity::Error);
    }

    #[test]
    fn zero_finding_documents_count_as_scanned_but_not_listed() {
        let mut store = FindingStore::new();
        store.replace("clean.py", vec![], "h".into());
        store.replace(
            "dirty.py",
            vec![finding("dirty.py", 0, "BST060", Severity::Error)],
            "h".into(),
        );

        let report = generate(&store);
        assert_eq!(report.files_scanned, 2);
        assert!(!report.by_file.contains_key("clean.py"));
        assert!(report.by_file.contains_key("dirty.py"));
    }

    #[test]
    fn cleared_document_absent_from_report() {
        let mut store = FindingStore::new();
        store.replace(
            "gone.py",
            vec![finding("gone.py", 0, "BST060", Severity::Error)],
            "h".into(),
        );
        store.clear("gone.py");

        let report = generate(&store);
        assert_eq!(report.files_scanned, 0);
        assert!(!report.by_file.contains_key("gone.py"));
    }

    #[test]
    fn display_name_is_file_component() {
        let mut store = FindingStore::new();
        store.replace(
            "deep/nested/app.py",
            vec![finding("deep/nested/app.py", 0, "BST060", Severity::Error)],
            "h".into(),
        );
        let report = generate(&store);
        assert_eq!(report.by_file["deep/nested/app.py"].display_name, "app.py");
    }
}
