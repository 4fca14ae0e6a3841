//! promptshield — static security scanner for AI/LLM application code.
//!
//! Scans Python and JavaScript/TypeScript sources for risky textual
//! shapes: hardcoded model API keys, user input interpolated into
//! prompts, unvalidated model output, PII reaching log sinks, dynamic
//! execution primitives, missing rate limiting. Matching is purely
//! lexical (regex over lines): there is no AST, data-flow, or taint
//! analysis, and the false-positive/false-negative profile that comes
//! with that is part of the contract.
//!
//! Comment and docstring suppression is line-local: block comments and
//! triple-quoted strings spanning multiple lines are not tracked
//! across lines. Findings inside such regions can slip through; see
//! `engine::context` for the exact heuristics.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use promptshield::{scan, ScanOptions};
//!
//! let options = ScanOptions::default();
//! let outcome = scan(Path::new("./my-llm-app"), &options).unwrap();
//! println!(
//!     "{} issue(s) in {} file(s)",
//!     outcome.report.total_issues, outcome.report.files_scanned
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod lang;
pub mod output;
pub mod report;
pub mod rules;
pub mod store;
pub mod sweep;

use std::path::Path;
use std::sync::atomic::AtomicBool;

use config::Config;
use engine::ScanEngine;
use error::Result;
use output::OutputFormat;
use report::SecurityReport;
use store::FindingStore;
use sweep::SweepSummary;

/// Options for a scan invocation.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Path to config file (defaults to `.promptshield.toml` in scan dir).
    pub config_path: Option<std::path::PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// CLI override for the fail-on threshold.
    pub fail_on_override: Option<rules::Severity>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            format: OutputFormat::Console,
            fail_on_override: None,
        }
    }
}

/// Everything one workspace scan produced.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: SecurityReport,
    pub summary: SweepSummary,
    pub store: FindingStore,
    /// Threshold the scan is judged against.
    pub fail_on: rules::Severity,
}

impl ScanOutcome {
    /// Whether the scan passes the fail-on threshold.
    pub fn pass(&self) -> bool {
        match self.fail_on {
            rules::Severity::Error => self.report.critical_count == 0,
            rules::Severity::Warning => self.report.total_issues == 0,
        }
    }
}

/// Run a complete scan: load config, sweep the directory, aggregate
/// the report.
pub fn scan(path: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    let config_path = options
        .config_path
        .clone()
        .unwrap_or_else(|| path.join(".promptshield.toml"));
    let mut config = Config::load(&config_path)?;

    if let Some(fail_on) = options.fail_on_override {
        config.fail_on = fail_on;
    }
    let fail_on = config.fail_on;

    let engine = ScanEngine::new(config);
    let mut store = FindingStore::new();
    let cancel = AtomicBool::new(false);
    let summary = sweep::run(&engine, &mut store, path, &cancel)?;
    let report = report::generate(&store);

    Ok(ScanOutcome {
        report,
        summary,
        store,
        fail_on,
    })
}

/// Render a scan outcome in the specified format.
pub fn render_report(outcome: &ScanOutcome, format: OutputFormat) -> Result<String> {
    output::render(&outcome.store, &outcome.report, format)
}
