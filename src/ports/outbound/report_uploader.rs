use crate::shared::Result;
use std::path::Path;

/// ReportUploader port for shipping a finished report to the tracker
pub trait ReportUploader {
    /// Uploads the JSON report stored at `report_file`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the request fails, or the
    /// tracker answers with a non-success status
    fn upload(&self, report_file: &Path) -> Result<()>;
}
