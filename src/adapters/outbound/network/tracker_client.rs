use crate::ports::outbound::ReportUploader;
use crate::shared::error::TrackerError;
use crate::shared::security::validate_tracker_url;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Tracker client uploading reports to `<tracker>/report/upload`
///
/// One blocking POST per report. No retries: a failed upload is reported to
/// the caller, which decides whether to run again.
#[derive(Debug)]
pub struct TrackerClient {
    client: Client,
    tracker_url: String,
    authorization: Option<String>,
}

impl TrackerClient {
    const UPLOAD_PATH: &'static str = "/report/upload";
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for `tracker_url`
    ///
    /// # Arguments
    /// * `tracker_url` - Base URL of the tracker, `http://` or `https://`
    /// * `authorization` - Value of the `Authorization` header; empty means none
    ///
    /// # Errors
    /// Returns an error if the URL is not an http(s) URL or the HTTP client cannot be built
    pub fn new(tracker_url: &str, authorization: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("npm-tracker/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Self::with_client(client, tracker_url, authorization)
    }

    fn with_client(client: Client, tracker_url: &str, authorization: Option<String>) -> Result<Self> {
        let tracker_url = tracker_url.trim();
        validate_tracker_url(tracker_url).map_err(|e| TrackerError::Validation {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            tracker_url: tracker_url.trim_end_matches('/').to_string(),
            authorization: authorization.filter(|value| !value.trim().is_empty()),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.tracker_url, Self::UPLOAD_PATH)
    }

    fn transport_error(&self, details: String, source: Option<io::Error>) -> anyhow::Error {
        TrackerError::ReportTransportError {
            url: self.upload_url(),
            details,
            source,
        }
        .into()
    }
}

impl ReportUploader for TrackerClient {
    fn upload(&self, report_file: &Path) -> Result<()> {
        let body = fs::read(report_file).map_err(|e| {
            self.transport_error(
                format!("Failed to read report file {}", report_file.display()),
                Some(e),
            )
        })?;

        let mut request = self
            .client
            .post(self.upload_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.as_str());
        }

        let response = request
            .send()
            .map_err(|e| {
                self.transport_error("unknown exception".to_string(), Some(io::Error::other(e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.transport_error(
                format!(
                    "Tracker responded with {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
                None,
            ));
        }

        Ok(())
    }
}
