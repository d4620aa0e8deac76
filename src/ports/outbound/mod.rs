/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod module_locator;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_reader;
pub mod report_uploader;

pub use module_locator::ModuleLocator;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_reader::ProjectReader;
pub use report_uploader::ReportUploader;
