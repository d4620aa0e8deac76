use crate::ports::outbound::{ProgressReporter, ReportUploader};
use crate::shared::Result;
use std::path::Path;

/// SendReportUseCase - Uploads a written report file to the tracker
pub struct SendReportUseCase<U, P> {
    uploader: U,
    progress_reporter: P,
}

impl<U, P> SendReportUseCase<U, P>
where
    U: ReportUploader,
    P: ProgressReporter,
{
    pub fn new(uploader: U, progress_reporter: P) -> Self {
        Self {
            uploader,
            progress_reporter,
        }
    }

    /// Uploads `report_file`; any failure is returned unchanged to the caller
    pub fn execute(&self, report_file: &Path) -> Result<()> {
        self.progress_reporter.report("📤 Sending report to tracker...");
        self.uploader.upload(report_file)?;
        self.progress_reporter
            .report_completion("✅ Report accepted by tracker");
        Ok(())
    }
}
