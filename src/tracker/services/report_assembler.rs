use crate::tracker::domain::{
    ManifestRoots, ModuleDependencies, ReportMetadata, TrackerProject, TrackerReport,
    NPM_BUILD_TOOL,
};
use chrono::Utc;
use uuid::Uuid;

/// ReportAssembler service: bundles classified artifacts into a tracker report
pub struct ReportAssembler;

impl ReportAssembler {
    /// Generates report metadata with the current timestamp and a fresh report id
    pub fn generate_metadata(tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(timestamp, tool_version.to_string(), report_id)
    }

    /// Generates report metadata for this tool, using the version from Cargo.toml
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(env!("CARGO_PKG_VERSION"))
    }

    /// Assembles the report for one npm project
    ///
    /// # Arguments
    /// * `manifest` - Manifest roots, providing the project identity
    /// * `lockfile_version` - `lockfileVersion` of package-lock.json, if present
    /// * `dependencies` - Classified compile and development artifacts
    /// * `metadata` - Report id, timestamp and tool version
    pub fn assemble(
        manifest: &ManifestRoots,
        lockfile_version: Option<u32>,
        dependencies: ModuleDependencies,
        metadata: &ReportMetadata,
    ) -> TrackerReport {
        TrackerReport {
            build_tool: NPM_BUILD_TOOL.to_string(),
            build_tool_version: lockfile_version.map(|v| format!("lockfileVersion {}", v)),
            plugin_version: metadata.tool_version().to_string(),
            report_id: metadata.report_id().to_string(),
            generated_at: metadata.timestamp().to_string(),
            project: TrackerProject {
                artifact: manifest.project().identity(),
                packaging: NPM_BUILD_TOOL.to_string(),
            },
            compile: dependencies.compile,
            development: dependencies.development,
        }
    }
}
