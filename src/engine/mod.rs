//! The scan engine: catalog × lines × patterns × context filter.

pub mod context;
pub mod matcher;

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::error::Result;
use crate::lang::Language;
use crate::rules::{rule_catalog, DetectionRule, Finding};
use crate::store::FindingStore;

/// Runs the rule catalog over documents and maintains the finding
/// store. Construct one per process with the host's configuration; the
/// catalog and configuration are immutable for the engine's lifetime.
pub struct ScanEngine {
    rules: &'static [DetectionRule],
    config: Config,
}

impl ScanEngine {
    pub fn new(config: Config) -> Self {
        Self {
            rules: rule_catalog(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan one document and atomically replace its finding set in the
    /// store.
    ///
    /// Unknown language ids are not applicable rather than an error:
    /// the scan returns an empty set and the store keeps whatever it
    /// had for that document. A document whose text is unchanged since
    /// its last scan (by content hash) returns the stored findings
    /// without re-matching.
    pub fn scan_document(
        &self,
        store: &mut FindingStore,
        document: &str,
        language_id: &str,
        text: &str,
    ) -> Result<Vec<Finding>> {
        if !self.config.enabled {
            return Ok(Vec::new());
        }

        let Some(language) = Language::from_id(language_id) else {
            tracing::debug!(document, language = language_id, "unsupported language, skipping");
            return Ok(Vec::new());
        };

        let hash = content_hash(text);
        if store.content_hash(document) == Some(hash.as_str()) {
            tracing::debug!(document, "content unchanged, reusing findings");
            return Ok(store.findings(document).to_vec());
        }

        let findings = self.scan_text(document, language, text);
        store.replace(document, findings.clone(), hash);
        Ok(findings)
    }

    /// Pure matching pass over one document's text. Findings sharing
    /// (line, column, code) with an earlier match are dropped at
    /// insertion time, never after the fact.
    fn scan_text(&self, document: &str, language: Language, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut seen: HashSet<(u32, u32, &'static str)> = HashSet::new();

        for (line_idx, line) in text.lines().enumerate() {
            for rule in self.rules {
                if !rule.applies_to(language) {
                    continue;
                }
                if self.config.rule_disabled(rule.code) {
                    continue;
                }
                if let Some(family) = rule.framework {
                    if !self.config.framework_enabled(family) {
                        continue;
                    }
                }

                for pattern in &rule.patterns {
                    for span in matcher::find_matches(pattern, line) {
                        if context::is_suppressed(language, line, span.start) {
                            continue;
                        }
                        let column = matcher::char_column(line, span.start);
                        if !seen.insert((line_idx as u32, column, rule.code)) {
                            continue;
                        }
                        findings.push(Finding {
                            document: document.to_string(),
                            line: line_idx as u32,
                            column,
                            length: matcher::char_length(line, span),
                            code: rule.code.to_string(),
                            rule_name: rule.name.to_string(),
                            category: rule.category,
                            severity: rule.severity,
                            message: rule.message.to_string(),
                            documentation: rule.documentation().to_string(),
                        });
                    }
                }
            }
        }

        findings
    }
}

/// SHA-256 of the document text, hex-encoded.
pub(crate) fn content_hash(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}
