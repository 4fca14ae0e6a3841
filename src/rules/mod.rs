mod catalog;
pub mod finding;
pub mod remediation;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ShieldError};
use crate::lang::Language;

pub use finding::{Category, Finding, RuleMetadata, Severity};
pub use remediation::remediation;

/// Raw, declarative form of a detection rule as written in the catalog.
pub(crate) struct RuleSpec {
    pub code: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    pub patterns: &'static [&'static str],
    pub languages: &'static [Language],
    /// AI-framework family this rule is specific to; `None` applies
    /// regardless of which families the host has enabled.
    pub framework: Option<&'static str>,
}

/// A detection rule with its patterns compiled.
#[derive(Debug)]
pub struct DetectionRule {
    pub code: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
    pub patterns: Vec<Regex>,
    pub languages: &'static [Language],
    pub framework: Option<&'static str>,
}

impl DetectionRule {
    pub fn applies_to(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Extended remediation guidance, total over the category set.
    pub fn documentation(&self) -> &'static str {
        remediation(self.category)
    }

    pub fn metadata(&self) -> RuleMetadata {
        RuleMetadata {
            code: self.code.into(),
            name: self.name.into(),
            message: self.message.into(),
            severity: self.severity,
            category: self.category,
        }
    }
}

/// Compile the built-in catalog.
///
/// A pattern that fails to compile, an empty pattern list, or a
/// duplicate code is a programming error in the catalog; callers treat
/// any error here as fatal rather than running with a partial rule set.
pub fn compile_catalog() -> Result<Vec<DetectionRule>> {
    let mut seen = std::collections::HashSet::new();
    let mut rules = Vec::with_capacity(catalog::RULES.len());

    for spec in catalog::RULES {
        if !seen.insert(spec.code) {
            return Err(ShieldError::Rule {
                code: spec.code.into(),
                message: "duplicate rule code in catalog".into(),
            });
        }
        if spec.patterns.is_empty() {
            return Err(ShieldError::Rule {
                code: spec.code.into(),
                message: "rule has no patterns".into(),
            });
        }

        let mut patterns = Vec::with_capacity(spec.patterns.len());
        for p in spec.patterns {
            let re = Regex::new(p).map_err(|e| ShieldError::Rule {
                code: spec.code.into(),
                message: format!("invalid pattern '{}': {}", p, e),
            })?;
            patterns.push(re);
        }

        rules.push(DetectionRule {
            code: spec.code,
            name: spec.name,
            category: spec.category,
            severity: spec.severity,
            message: spec.message,
            patterns,
            languages: spec.languages,
            framework: spec.framework,
        });
    }

    Ok(rules)
}

static CATALOG: Lazy<Vec<DetectionRule>> = Lazy::new(|| {
    compile_catalog()
        .unwrap_or_else(|e| panic!("built-in rule catalog failed to compile: {}", e))
});

/// The full, statically-defined rule catalog. Read-only.
pub fn rule_catalog() -> &'static [DetectionRule] {
    &CATALOG
}

/// Look up a rule by its stable code.
pub fn rule_by_code(code: &str) -> Option<&'static DetectionRule> {
    rule_catalog().iter().find(|r| r.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_compiles() {
        let rules = compile_catalog().unwrap();
        assert!(!rules.is_empty());
    }

    #[test]
    fn codes_are_unique_and_stable() {
        let rules = rule_catalog();
        let codes: std::collections::HashSet<_> = rules.iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), rules.len());
        // The published code set; renaming any of these is breaking.
        for code in [
            "BST001", "BST002", "BST003", "BST010", "BST011", "BST020", "BST030", "BST040",
            "BST050", "BST060", "BST070", "BST080",
        ] {
            assert!(rule_by_code(code).is_some(), "missing {}", code);
        }
    }

    #[test]
    fn every_rule_has_patterns_and_languages() {
        for rule in rule_catalog() {
            assert!(!rule.patterns.is_empty(), "{} has no patterns", rule.code);
            assert!(!rule.languages.is_empty(), "{} has no languages", rule.code);
            assert!(!rule.documentation().is_empty());
        }
    }

    #[test]
    fn openai_key_pattern_matches_project_keys() {
        let rule = rule_by_code("BST001").unwrap();
        let line = r#"api_key = "sk-proj-abc123def456ghi789jkl012mno345pqr678stu901vwx234yz""#;
        assert!(rule.patterns.iter().any(|p| p.is_match(line)));
    }

    #[test]
    fn anthropic_pattern_does_not_claim_openai_keys() {
        let rule = rule_by_code("BST002").unwrap();
        let line = r#"api_key = "sk-proj-abc123def456ghi789jkl012mno345pqr678stu901vwx234yz""#;
        assert!(!rule.patterns.iter().any(|p| p.is_match(line)));
    }
}
