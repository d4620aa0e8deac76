use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{ModuleLocator, ProgressReporter, ProjectReader};
use crate::shared::Result;
use crate::tracker::domain::{LockGraph, ManifestRoots};
use crate::tracker::services::{ReportAssembler, ResolutionOutcome, TrailResolver};

/// CreateReportUseCase - Builds a tracker report for one npm project
///
/// Generic over its ports so tests can inject in-memory readers.
///
/// # Type Parameters
/// * `R` - ProjectReader implementation
/// * `L` - ModuleLocator implementation
/// * `P` - ProgressReporter implementation
pub struct CreateReportUseCase<R, L, P> {
    project_reader: R,
    module_locator: L,
    progress_reporter: P,
}

impl<R, L, P> CreateReportUseCase<R, L, P>
where
    R: ProjectReader,
    L: ModuleLocator,
    P: ProgressReporter,
{
    pub fn new(project_reader: R, module_locator: L, progress_reporter: P) -> Self {
        Self {
            project_reader,
            module_locator,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails only when package.json or package-lock.json cannot be loaded.
    /// Packages without a trail are reported as warnings and kept in the report.
    pub fn execute(&self, request: &ReportRequest) -> Result<ReportResponse> {
        let (manifest, graph) = self.load_project(request)?;

        let outcome = self.resolve(request, &manifest, &graph);
        self.report_outcome(&outcome);

        let metadata = ReportAssembler::generate_default_metadata();
        let report = ReportAssembler::assemble(
            &manifest,
            graph.lockfile_version(),
            outcome.dependencies,
            &metadata,
        );

        Ok(ReportResponse::new(
            report,
            outcome.unreachable,
            outcome.skipped_optional,
        ))
    }

    fn load_project(&self, request: &ReportRequest) -> Result<(ManifestRoots, LockGraph)> {
        self.progress_reporter.report(&format!(
            "📖 Loading package.json and package-lock.json from: {}",
            request.project_path.display()
        ));

        let manifest = self.project_reader.read_manifest(&request.project_path)?;
        let graph = self.project_reader.read_lock_graph(&request.project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} direct ({} dev) and {} locked package(s)",
            manifest.normal().len() + manifest.dev().len(),
            manifest.dev().len(),
            graph.len()
        ));

        Ok((manifest, graph))
    }

    fn resolve(
        &self,
        request: &ReportRequest,
        manifest: &ManifestRoots,
        graph: &LockGraph,
    ) -> ResolutionOutcome {
        self.progress_reporter.report("🔍 Resolving dependency trails...");

        TrailResolver::resolve_with_progress(
            manifest,
            graph,
            |entry| {
                self.module_locator
                    .is_materialized(&request.project_path, entry)
            },
            |current, total| self.progress_reporter.report_progress(current, total, None),
        )
    }

    fn report_outcome(&self, outcome: &ResolutionOutcome) {
        if !outcome.skipped_optional.is_empty() {
            self.progress_reporter.report(&format!(
                "⏭️  Skipped {} optional package(s) that are not installed",
                outcome.skipped_optional.len()
            ));
        }

        for name in &outcome.unreachable {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: No trail from a direct dependency to '{}'. It is reported without a trail.",
                name
            ));
        }

        self.progress_reporter.report(&format!(
            "✅ Classified {} compile and {} development package(s)",
            outcome.dependencies.compile.len(),
            outcome.dependencies.development.len()
        ));
    }
}
