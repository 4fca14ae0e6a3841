use std::collections::BTreeSet;

use serde_json::{json, Value};

use crate::error::Result;
use crate::report::SecurityReport;
use crate::rules::{rule_by_code, Severity};
use crate::store::FindingStore;

/// Render current findings as SARIF 2.1.0.
///
/// Produces a self-contained SARIF log compatible with GitHub Code
/// Scanning and other SARIF consumers. SARIF regions are one-based, so
/// the zero-based finding locations are shifted here at the edge.
pub fn render(store: &FindingStore, report: &SecurityReport) -> Result<String> {
    let codes: BTreeSet<&str> = store
        .documents()
        .flat_map(|(_, findings)| findings.iter().map(|f| f.code.as_str()))
        .collect();

    let rules: Vec<Value> = codes
        .iter()
        .map(|code| {
            let mut rule = json!({
                "id": code,
                "defaultConfiguration": {},
            });
            if let Some(meta) = rule_by_code(code) {
                rule = json!({
                    "id": code,
                    "name": meta.name,
                    "shortDescription": { "text": meta.message },
                    "fullDescription": { "text": meta.documentation() },
                    "defaultConfiguration": {
                        "level": severity_to_sarif_level(meta.severity),
                    },
                });
            }
            rule
        })
        .collect();

    let results: Vec<Value> = store
        .documents()
        .flat_map(|(document, findings)| {
            findings.iter().map(move |f| {
                json!({
                    "ruleId": f.code,
                    "level": severity_to_sarif_level(f.severity),
                    "message": { "text": f.message },
                    "locations": [{
                        "physicalLocation": {
                            "artifactLocation": { "uri": document },
                            "region": {
                                "startLine": f.line + 1,
                                "startColumn": f.column + 1,
                                "endColumn": f.column + f.length + 1,
                            },
                        },
                    }],
                    "fixes": [{
                        "description": { "text": f.documentation },
                    }],
                })
            })
        })
        .collect();

    let sarif = json!({
        "$schema": "https://docs.oasis-open.org/sarif/sarif/v2.1.0/errata01/os/schemas/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "promptshield",
                    "informationUri": "https://github.com/limaronaldo/promptshield",
                    "version": env!("CARGO_PKG_VERSION"),
                    "semanticVersion": env!("CARGO_PKG_VERSION"),
                    "rules": rules,
                },
            },
            "results": results,
            "automationDetails": {
                "id": "promptshield/workspace",
                "guid": report.run_id.to_string(),
            },
        }],
    });

    let output = serde_json::to_string_pretty(&sarif)?;
    Ok(output)
}

fn severity_to_sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::ScanEngine;
    use crate::report;

    #[test]
    fn sarif_log_carries_rules_and_one_based_regions() {
        let engine = ScanEngine::new(Config::default());
        let mut store = FindingStore::new();
        engine
            .scan_document(&mut store, "app.py", "python", "eval(data)\n")
            .unwrap();

        let rendered = render(&store, &report::generate(&store)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let results = &parsed["runs"][0]["results"];
        assert_eq!(results.as_array().unwrap().len(), 1);
        assert_eq!(results[0]["ruleId"], "BST060");
        assert_eq!(
            results[0]["locations"][0]["physicalLocation"]["region"]["startLine"],
            1
        );
        assert_eq!(
            results[0]["locations"][0]["physicalLocation"]["region"]["startColumn"],
            1
        );

        let rules = parsed["runs"][0]["tool"]["driver"]["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0]["id"], "BST060");
    }
}
