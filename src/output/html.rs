use crate::report::SecurityReport;
use crate::rules::Severity;

/// Render the report as a self-contained HTML dashboard.
pub fn render(report: &SecurityReport) -> String {
    let code_rows: String = report
        .by_code
        .iter()
        .map(|(code, s)| {
            format!(
                r#"<tr class="{cls}"><td><code>{code}</code></td><td>{count}</td><td>{sev}</td><td>{desc}</td></tr>"#,
                cls = severity_class(s.severity),
                code = code,
                count = s.count,
                sev = s.severity,
                desc = html_escape(&s.description),
            )
        })
        .collect();

    let file_rows: String = report
        .by_file
        .iter()
        .flat_map(|(path, summary)| {
            summary.issues.iter().map(move |issue| {
                format!(
                    r#"<tr class="{cls}"><td><code>{path}</code></td><td>{line}</td><td><code>{code}</code></td><td>{sev}</td><td>{msg}</td></tr>"#,
                    cls = severity_class(issue.severity),
                    path = html_escape(path),
                    line = issue.line + 1,
                    code = issue.code,
                    sev = issue.severity,
                    msg = html_escape(&issue.message),
                )
            })
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>promptshield report</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 2rem; color: #1a1a2e; }}
  .tiles {{ display: flex; gap: 1rem; margin-bottom: 2rem; }}
  .tile {{ border: 1px solid #ddd; border-radius: 8px; padding: 1rem 1.5rem; min-width: 8rem; }}
  .tile .num {{ font-size: 2rem; font-weight: 700; }}
  table {{ border-collapse: collapse; width: 100%; margin-bottom: 2rem; }}
  th, td {{ text-align: left; padding: 0.4rem 0.8rem; border-bottom: 1px solid #eee; }}
  tr.error td:first-child {{ border-left: 3px solid #c0392b; }}
  tr.warning td:first-child {{ border-left: 3px solid #e67e22; }}
  .meta {{ color: #666; font-size: 0.85rem; }}
</style>
</head>
<body>
<h1>Security report</h1>
<p class="meta">Run {run_id} — generated {generated_at}</p>
<div class="tiles">
  <div class="tile"><div class="num">{files}</div>files scanned</div>
  <div class="tile"><div class="num">{total}</div>total issues</div>
  <div class="tile"><div class="num">{critical}</div>critical</div>
  <div class="tile"><div class="num">{warning}</div>warnings</div>
</div>
<h2>By rule</h2>
<table>
<tr><th>Code</th><th>Count</th><th>Severity</th><th>Description</th></tr>
{code_rows}
</table>
<h2>By file</h2>
<table>
<tr><th>File</th><th>Line</th><th>Code</th><th>Severity</th><th>Message</th></tr>
{file_rows}
</table>
</body>
</html>
"#,
        run_id = report.run_id,
        generated_at = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        files = report.files_scanned,
        total = report.total_issues,
        critical = report.critical_count,
        warning = report.warning_count,
        code_rows = code_rows,
        file_rows = file_rows,
    )
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crate::store::FindingStore;

    #[test]
    fn renders_standalone_document() {
        let store = FindingStore::new();
        let rendered = render(&report::generate(&store));
        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("files scanned"));
    }

    #[test]
    fn escapes_markup_in_messages() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
    }
}
