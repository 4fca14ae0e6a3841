//! In-memory finding store.
//!
//! One instance per process, owned explicitly by the host and passed
//! to the engine and reporter; nothing here is a global. Contents are
//! lost on process exit by design.

use std::collections::BTreeMap;

use crate::rules::Finding;

#[derive(Debug)]
struct DocumentEntry {
    content_hash: String,
    findings: Vec<Finding>,
}

/// Current findings keyed by document identity.
///
/// A document has an entry from its first completed scan until it is
/// explicitly cleared. A zero-finding scan still records an (empty)
/// entry, which is what makes it count as "scanned" in reports.
#[derive(Debug, Default)]
pub struct FindingStore {
    documents: BTreeMap<String, DocumentEntry>,
}

impl FindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically swap a document's finding list. The prior list is
    /// only ever replaced whole; partial results are never visible.
    pub fn replace(&mut self, document: &str, findings: Vec<Finding>, content_hash: String) {
        self.documents.insert(
            document.to_string(),
            DocumentEntry {
                content_hash,
                findings,
            },
        );
    }

    /// Remove a document entirely. Returns whether it was present.
    pub fn clear(&mut self, document: &str) -> bool {
        self.documents.remove(document).is_some()
    }

    pub fn clear_all(&mut self) {
        self.documents.clear();
    }

    /// Current finding count for a document, 0 if it was never scanned
    /// or has been cleared.
    pub fn count(&self, document: &str) -> usize {
        self.documents.get(document).map_or(0, |e| e.findings.len())
    }

    pub fn findings(&self, document: &str) -> &[Finding] {
        match self.documents.get(document) {
            Some(e) => &e.findings,
            None => &[],
        }
    }

    /// Hash of the text that produced the current findings, if any.
    pub fn content_hash(&self, document: &str) -> Option<&str> {
        self.documents.get(document).map(|e| e.content_hash.as_str())
    }

    /// Documents with a recorded scan, in stable (sorted) order.
    pub fn documents(&self) -> impl Iterator<Item = (&str, &[Finding])> {
        self.documents
            .iter()
            .map(|(k, e)| (k.as_str(), e.findings.as_slice()))
    }

    /// Number of documents with a recorded scan (including zero-finding
    /// scans).
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total_findings(&self) -> usize {
        self.documents.values().map(|e| e.findings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, Severity};

    fn finding(document: &str, line: u32, code: &str) -> Finding {
        Finding {
            document: document.into(),
            line,
            column: 0,
            length: 4,
            code: code.into(),
            rule_name: "Test".into(),
            category: Category::InsecureDynamicExecution,
            severity: Severity::Error,
            message: "test".into(),
            documentation: "fix it".into(),
        }
    }

    #[test]
    fn replace_swaps_whole_list() {
        let mut store = FindingStore::new();
        store.replace("a.py", vec![finding("a.py", 0, "BST060")], "h1".into());
        assert_eq!(store.count("a.py"), 1);

        store.replace("a.py", vec![], "h2".into());
        assert_eq!(store.count("a.py"), 0);
        assert_eq!(store.document_count(), 1);
        assert_eq!(store.content_hash("a.py"), Some("h2"));
    }

    #[test]
    fn clear_removes_document() {
        let mut store = FindingStore::new();
        store.replace("a.py", vec![finding("a.py", 0, "BST060")], "h".into());
        assert!(store.clear("a.py"));
        assert_eq!(store.count("a.py"), 0);
        assert_eq!(store.document_count(), 0);
        assert!(!store.clear("a.py"));
    }

    #[test]
    fn count_is_zero_for_unknown_document() {
        let store = FindingStore::new();
        assert_eq!(store.count("never-scanned.py"), 0);
        assert!(store.findings("never-scanned.py").is_empty());
    }

    #[test]
    fn documents_iterate_in_sorted_order() {
        let mut store = FindingStore::new();
        store.replace("b.py", vec![], "h".into());
        store.replace("a.py", vec![], "h".into());
        let keys: Vec<_> = store.documents().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["a.py", "b.py"]);
    }
}
