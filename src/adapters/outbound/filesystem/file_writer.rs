use crate::ports::outbound::OutputPresenter;
use crate::shared::error::TrackerError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing the report to a file
///
/// Missing parent directories are created, so a path such as
/// `build/tracker/report.json` works on a fresh checkout.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: String) -> anyhow::Error {
        TrackerError::FileWriteError {
            path: self.output_path.clone(),
            details,
        }
        .into()
    }

    fn ensure_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if parent != Path::new("") && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    self.write_error(format!(
                        "Failed to create parent directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Rejects writing through an existing symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if fs::symlink_metadata(&self.output_path).is_ok() {
            validate_not_symlink(&self.output_path, "write")
                .map_err(|e| self.write_error(e.to_string()))?;
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_output_security()?;
        self.ensure_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Report written: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing the report to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.write_all(b"\n"))
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
