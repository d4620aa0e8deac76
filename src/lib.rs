//! npm-tracker - dependency tracker reports for npm projects
//!
//! This library reads `package.json` and `package-lock.json`, classifies each
//! locked package as a compile or development dependency, and traces every
//! package back to the direct dependency that pulled it in. The result is a
//! tracker report that can be written to disk or uploaded to a tracker server.
//!
//! # Architecture
//!
//! - **Domain Layer** (`tracker`): Lock graph, manifest roots, trail resolution and report models
//! - **Application Layer** (`application`): Use cases and request/response DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Filesystem, console and HTTP implementations of the ports
//! - **Shared** (`shared`): Error types, result alias and security checks
//!
//! # Example
//!
//! ```no_run
//! use npm_tracker::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = CreateReportUseCase::new(
//!     FileSystemReader::new(),
//!     NodeModulesLocator::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::builder().project_path(".").build()?;
//! let response = use_case.execute(&request)?;
//!
//! StdoutPresenter::new().present(&response.to_json()?)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod tracker;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, NodeModulesLocator, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::TrackerClient;
    pub use crate::application::dto::{ReportRequest, ReportRequestBuilder, ReportResponse};
    pub use crate::application::use_cases::{CreateReportUseCase, SendReportUseCase};
    pub use crate::ports::outbound::{
        ModuleLocator, OutputPresenter, ProgressReporter, ProjectReader, ReportUploader,
    };
    pub use crate::tracker::domain::{
        Artifact, LockEntry, LockGraph, ManifestRoots, ModuleDependencies, Package, PackageName,
        ReportMetadata, TrackerReport, Version,
    };
    pub use crate::tracker::services::{
        ReportAssembler, ResolutionOutcome, TrailResolver, TrailSearch,
    };
    pub use crate::shared::Result;
}
