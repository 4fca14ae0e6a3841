use crate::error::Result;
use crate::report::SecurityReport;

/// Render the report as pretty-printed JSON.
pub fn render(report: &SecurityReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report;
    use crate::store::FindingStore;

    #[test]
    fn empty_report_serializes() {
        let store = FindingStore::new();
        let rendered = render(&report::generate(&store)).unwrap();
        assert!(rendered.contains("\"files_scanned\": 0"));
        assert!(rendered.contains("\"total_issues\": 0"));
    }
}
