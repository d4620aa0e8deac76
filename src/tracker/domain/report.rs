use super::Artifact;
use serde::Serialize;

/// Build tool recorded for npm reports
pub const NPM_BUILD_TOOL: &str = "npm";

/// Project section of a tracker report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerProject {
    pub artifact: String,
    pub packaging: String,
}

/// Document uploaded to the tracker's `/report/upload` endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerReport {
    pub build_tool: String,
    pub build_tool_version: Option<String>,
    pub plugin_version: String,
    pub report_id: String,
    pub generated_at: String,
    pub project: TrackerProject,
    pub compile: Vec<Artifact>,
    pub development: Vec<Artifact>,
}
