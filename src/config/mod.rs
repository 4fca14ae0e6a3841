use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::Severity;

/// Host configuration surface, loaded from `.promptshield.toml`.
///
/// The scanner consumes these as plain values; where they come from
/// (editor settings, CLI flags, the TOML file) is the host's business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Master switch. When off, every scan yields an empty set.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Host hint: scan documents when they are opened.
    #[serde(default = "default_true")]
    pub scan_on_open: bool,
    /// Host hint: scan documents when they are saved.
    #[serde(default = "default_true")]
    pub scan_on_save: bool,
    /// Glob patterns for paths to exclude from sweeps.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Enabled AI-framework families. Empty means all; rules tagged
    /// with a family not listed here are skipped.
    #[serde(default)]
    pub frameworks: Vec<String>,
    /// Rule codes to skip entirely.
    #[serde(default)]
    pub disabled_rules: HashSet<String>,
    /// Minimum severity that fails a CLI scan.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
}

fn default_true() -> bool {
    true
}

fn default_fail_on() -> Severity {
    Severity::Error
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            scan_on_open: true,
            scan_on_save: true,
            exclude: Vec::new(),
            frameworks: Vec::new(),
            disabled_rules: HashSet::new(),
            fail_on: Severity::Error,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn framework_enabled(&self, family: &str) -> bool {
        self.frameworks.is_empty() || self.frameworks.iter().any(|f| f == family)
    }

    pub fn rule_disabled(&self, code: &str) -> bool {
        self.disabled_rules.contains(code)
    }

    /// Compile the exclusion globs. A malformed pattern is skipped
    /// with a warning rather than failing the scan.
    pub fn exclusion_patterns(&self) -> Vec<glob::Pattern> {
        self.exclude
            .iter()
            .filter_map(|raw| match glob::Pattern::new(raw) {
                Ok(p) => Some(p),
                Err(e) => {
                    tracing::warn!(pattern = %raw, error = %e, "ignoring malformed exclusion glob");
                    None
                }
            })
            .collect()
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# promptshield configuration
# See https://github.com/limaronaldo/promptshield for documentation.

# Master switch.
enabled = true

# Scan documents as the host opens/saves them.
scan_on_open = true
scan_on_save = true

# Glob patterns excluded from workspace sweeps.
exclude = ["**/node_modules/**", "**/.venv/**"]

# AI-framework families to check for. Empty means all.
# frameworks = ["openai", "anthropic", "azure"]

# Rule codes to skip entirely.
# disabled_rules = ["BST080"]

# Minimum severity that fails a CLI scan (warning, error).
fail_on = "error"
"#
    }
}
