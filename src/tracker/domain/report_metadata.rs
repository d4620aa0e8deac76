/// ReportMetadata value object: when a report was generated, by which tool
/// version, and under which id
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    timestamp: String,
    tool_version: String,
    report_id: String,
}

impl ReportMetadata {
    pub fn new(timestamp: String, tool_version: String, report_id: String) -> Self {
        Self {
            timestamp,
            tool_version,
            report_id,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn report_id(&self) -> &str {
        &self.report_id
    }
}
