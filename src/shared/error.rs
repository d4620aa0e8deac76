use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between argument
/// mistakes and failures while building or uploading a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report created (and uploaded, when requested)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable lockfile, upload failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for tracker report generation.
///
/// Only load failures and upload failures are represented here. A transitive
/// package without a trail is part of the resolution outcome, not an error.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("package.json not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("package-lock.json not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Could not read dependency graph: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json and package-lock.json are valid JSON written by npm")]
    GraphLoadError { path: PathBuf, details: String },

    /// `source` holds the I/O or connection failure, if there was one
    #[error("Failed to send report to tracker: {url}\nDetails: {details}\n\n💡 Hint: Please verify the tracker URL and your authorization")]
    ReportTransportError {
        url: String,
        details: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid npm project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
