/// Use cases module containing application business logic orchestration
mod create_report;
mod send_report;

pub use create_report::CreateReportUseCase;
pub use send_report::SendReportUseCase;
