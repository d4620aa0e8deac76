use crate::shared::Result;
use crate::tracker::domain::TrackerReport;

/// ReportResponse - Response DTO from the create-report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// The assembled tracker report
    pub report: TrackerReport,
    /// Transitive packages reported without a trail
    pub unreachable: Vec<String>,
    /// Optional packages left out because they are not installed
    pub skipped_optional: Vec<String>,
}

impl ReportResponse {
    pub fn new(report: TrackerReport, unreachable: Vec<String>, skipped_optional: Vec<String>) -> Self {
        Self {
            report,
            unreachable,
            skipped_optional,
        }
    }

    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report)?)
    }
}
