use crate::shared::error::TrackerError;
use crate::shared::security::validate_tracker_url;
use crate::shared::Result;
use std::path::PathBuf;

/// ReportRequest - Request DTO for creating (and optionally sending) a report
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the npm project directory containing package.json
    pub project_path: PathBuf,
    /// File the report is written to; stdout when `None`
    pub output: Option<PathBuf>,
    /// Base URL of the tracker; the report is uploaded when set
    pub tracker_url: Option<String>,
    /// Authorization header value sent with the upload
    pub authorization: Option<String>,
    /// Resolve and validate only, without writing or uploading
    pub dry_run: bool,
}

impl ReportRequest {
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }

    pub fn should_upload(&self) -> bool {
        !self.dry_run && self.tracker_url.is_some()
    }
}

/// Builder for [`ReportRequest`] that validates option combinations
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    project_path: Option<PathBuf>,
    output: Option<PathBuf>,
    tracker_url: Option<String>,
    authorization: Option<String>,
    dry_run: bool,
}

impl ReportRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn tracker_url(mut self, tracker_url: Option<String>) -> Self {
        self.tracker_url = tracker_url;
        self
    }

    pub fn authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// # Errors
    /// Returns a validation error if:
    /// - No project path was given
    /// - The tracker URL is not an http(s) URL
    /// - An authorization value is given without a tracker URL
    pub fn build(self) -> Result<ReportRequest> {
        let project_path = self.project_path.ok_or_else(|| TrackerError::Validation {
            message: "project path is required".to_string(),
        })?;

        let tracker_url = self.tracker_url.map(|url| url.trim().to_string());
        if let Some(url) = &tracker_url {
            validate_tracker_url(url).map_err(|e| TrackerError::Validation {
                message: e.to_string(),
            })?;
        }

        let authorization = self.authorization.filter(|value| !value.trim().is_empty());
        if authorization.is_some() && tracker_url.is_none() {
            return Err(TrackerError::Validation {
                message: "an authorization value requires a tracker URL".to_string(),
            }
            .into());
        }

        Ok(ReportRequest {
            project_path,
            output: self.output,
            tracker_url,
            authorization,
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let request = ReportRequest::builder().project_path(".").build().unwrap();

        assert_eq!(request.project_path, PathBuf::from("."));
        assert!(request.output.is_none());
        assert!(!request.should_upload());
    }

    #[test]
    fn test_builder_requires_project_path() {
        let err = ReportRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("project path is required"));
    }

    #[test]
    fn test_builder_with_upload() {
        let request = ReportRequest::builder()
            .project_path("web")
            .tracker_url(Some(" https://tracker.example.com ".to_string()))
            .authorization(Some("Bearer abc".to_string()))
            .build()
            .unwrap();

        assert_eq!(request.tracker_url.as_deref(), Some("https://tracker.example.com"));
        assert!(request.should_upload());
    }

    #[test]
    fn test_builder_dry_run_never_uploads() {
        let request = ReportRequest::builder()
            .project_path("web")
            .tracker_url(Some("https://tracker.example.com".to_string()))
            .dry_run(true)
            .build()
            .unwrap();

        assert!(!request.should_upload());
    }

    #[test]
    fn test_builder_rejects_invalid_url() {
        let err = ReportRequest::builder()
            .project_path("web")
            .tracker_url(Some("tracker.example.com".to_string()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_builder_rejects_authorization_without_url() {
        let err = ReportRequest::builder()
            .project_path("web")
            .authorization(Some("Bearer abc".to_string()))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("requires a tracker URL"));
    }

    #[test]
    fn test_builder_ignores_blank_authorization() {
        let request = ReportRequest::builder()
            .project_path("web")
            .authorization(Some("   ".to_string()))
            .build()
            .unwrap();
        assert!(request.authorization.is_none());
    }
}
