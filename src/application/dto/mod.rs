/// Data Transfer Objects for application layer
///
/// DTOs carry data between the application layer and adapters,
/// keeping the tracker domain isolated.
mod report_request;
mod report_response;

pub use report_request::{ReportRequest, ReportRequestBuilder};
pub use report_response::ReportResponse;
