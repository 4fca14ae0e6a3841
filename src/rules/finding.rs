use serde::{Deserialize, Serialize};

/// A security finding produced by one scan of one document.
///
/// Carries a copy of the owning rule's metadata; the catalog is
/// immutable so no live reference is needed. Locations are zero-based;
/// `column` and `length` count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identity of the scanned document (path or URI).
    pub document: String,
    pub line: u32,
    pub column: u32,
    pub length: u32,
    /// Stable rule code (e.g. "BST010").
    pub code: String,
    /// Human-readable rule name.
    pub rule_name: String,
    pub category: Category,
    pub severity: Severity,
    /// Description shown at the finding site.
    pub message: String,
    /// Extended remediation guidance.
    pub documentation: String,
}

/// Severity of a finding. `Error` is blocking-grade, `Warning` is
/// advisory-grade; the ordering is used for fail-threshold checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn from_str_lenient(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "warning" | "warn" => Some(Self::Warning),
            "error" | "critical" | "crit" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Closed set of vulnerability categories the catalog detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CredentialExposure,
    PromptInjection,
    UnsanitizedInput,
    HardcodedPrompt,
    UnvalidatedOutput,
    InsecureRetrievalQuery,
    PiiLeakage,
    InsecureDynamicExecution,
    TokenExposure,
    MissingRateLimiting,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CredentialExposure => write!(f, "Credential Exposure"),
            Self::PromptInjection => write!(f, "Prompt Injection"),
            Self::UnsanitizedInput => write!(f, "Unsanitized Input"),
            Self::HardcodedPrompt => write!(f, "Hardcoded Prompt"),
            Self::UnvalidatedOutput => write!(f, "Unvalidated Output"),
            Self::InsecureRetrievalQuery => write!(f, "Insecure Retrieval Query"),
            Self::PiiLeakage => write!(f, "PII Leakage"),
            Self::InsecureDynamicExecution => write!(f, "Insecure Dynamic Execution"),
            Self::TokenExposure => write!(f, "Token Exposure"),
            Self::MissingRateLimiting => write!(f, "Missing Rate Limiting"),
        }
    }
}

/// Metadata about a catalog rule, used for `list-rules` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub code: String,
    pub name: String,
    pub message: String,
    pub severity: Severity,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn severity_lenient_parse() {
        assert_eq!(Severity::from_str_lenient("ERROR"), Some(Severity::Error));
        assert_eq!(
            Severity::from_str_lenient("critical"),
            Some(Severity::Error)
        );
        assert_eq!(Severity::from_str_lenient("warn"), Some(Severity::Warning));
        assert_eq!(Severity::from_str_lenient("fatal"), None);
    }
}
