use npm_tracker::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportUploader recording the uploaded file contents
#[derive(Default, Clone)]
pub struct MockReportUploader {
    pub uploads: Arc<Mutex<Vec<(PathBuf, String)>>>,
    failure: Option<String>,
}

impl MockReportUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            uploads: Arc::default(),
            failure: Some(message.to_string()),
        }
    }

    pub fn uploaded_bodies(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }
}

impl ReportUploader for MockReportUploader {
    fn upload(&self, report_file: &Path) -> Result<()> {
        if let Some(message) = &self.failure {
            anyhow::bail!("{}", message);
        }
        let body = std::fs::read_to_string(report_file)?;
        self.uploads
            .lock()
            .unwrap()
            .push((report_file.to_path_buf(), body));
        Ok(())
    }
}
