use crate::report::SecurityReport;
use crate::rules::{rule_by_code, Severity};

/// Render the report as console output, grouped by file with
/// error-severity issues first within each file.
pub fn render(report: &SecurityReport) -> String {
    let mut output = String::new();

    if report.total_issues == 0 {
        output.push_str(&format!(
            "\n  No security findings detected ({} file(s) scanned).\n\n",
            report.files_scanned
        ));
        return output;
    }

    output.push_str(&format!(
        "\n  {} issue(s) across {} file(s): {} error, {} warning\n\n",
        report.total_issues, report.by_file.len(), report.critical_count, report.warning_count
    ));

    for (path, summary) in &report.by_file {
        output.push_str(&format!("  {}\n", path));

        let mut issues: Vec<_> = summary.issues.iter().collect();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity).then(a.line.cmp(&b.line)));

        for issue in issues {
            let tag = match issue.severity {
                Severity::Error => "[ERROR]  ",
                Severity::Warning => "[WARNING]",
            };
            // one-based for humans
            output.push_str(&format!(
                "    {} {} {} (line {})\n",
                tag,
                issue.code,
                issue.message,
                issue.line + 1
            ));
            if let Some(rule) = rule_by_code(&issue.code) {
                output.push_str(&format!("              fix: {}\n", rule.documentation()));
            }
        }
        output.push('\n');
    }

    output.push_str("  By rule:\n");
    for (code, summary) in &report.by_code {
        output.push_str(&format!(
            "    {} x{} [{}] {}\n",
            code, summary.count, summary.severity, summary.description
        ));
    }
    output.push_str(&format!("\n  Files scanned: {}\n\n", report.files_scanned));

    output
}
