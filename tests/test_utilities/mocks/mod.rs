/// Mock implementations for testing
mod mock_module_locator;
mod mock_progress_reporter;
mod mock_project_reader;
mod mock_report_uploader;

pub use mock_module_locator::MockModuleLocator;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_reader::MockProjectReader;
pub use mock_report_uploader::MockReportUploader;
