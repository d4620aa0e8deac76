pub mod artifact;
pub mod lock_graph;
pub mod manifest;
pub mod package;
pub mod report;
pub mod report_metadata;

pub use artifact::{Artifact, ModuleDependencies, Trail, NPM_ARTIFACT_TYPE};
pub use lock_graph::{LockEntry, LockGraph};
pub use manifest::ManifestRoots;
pub use package::{Package, PackageName, Version};
pub use report::{TrackerProject, TrackerReport, NPM_BUILD_TOOL};
pub use report_metadata::ReportMetadata;
