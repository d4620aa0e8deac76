mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use npm_tracker::adapters::outbound::console::StderrProgressReporter;
use npm_tracker::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, NodeModulesLocator, StdoutPresenter,
};
use npm_tracker::adapters::outbound::network::TrackerClient;
use npm_tracker::application::dto::{ReportRequest, ReportResponse};
use npm_tracker::application::use_cases::{CreateReportUseCase, SendReportUseCase};
use npm_tracker::ports::outbound::{OutputPresenter, ProgressReporter};
use npm_tracker::shared::error::{ExitCode, TrackerError};
use npm_tracker::shared::Result;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tempfile::NamedTempFile;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?;
    let request = build_request(args, config, project_path)?;

    let use_case = CreateReportUseCase::new(
        FileSystemReader::new(),
        NodeModulesLocator::new(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(&request)?;

    if request.dry_run {
        report_dry_run(&response);
        return Ok(());
    }

    let json = response.to_json()?;

    match (&request.output, &request.tracker_url) {
        (Some(output), tracker_url) => {
            FileSystemWriter::new(output.clone()).present(&json)?;
            if let Some(url) = tracker_url {
                send_report(url, &request, output)?;
            }
        }
        (None, Some(url)) => {
            // Upload reads from a file; keep it alive until the request completes
            let report_file = write_temporary_report(&json)?;
            send_report(url, &request, report_file.path())?;
        }
        (None, None) => StdoutPresenter::new().present(&json)?,
    }

    Ok(())
}

/// Explicit `--config` must exist; otherwise the project directory is searched
fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => config::discover_config(project_path)?,
    };
    Ok(config.unwrap_or_default())
}

/// Merges CLI arguments over config file values
fn build_request(args: Args, config: ConfigFile, project_path: PathBuf) -> Result<ReportRequest> {
    let tracker_url = args.tracker_url.or_else(|| config.tracker_url.clone());
    let output = args.output.or_else(|| config.output.clone()).map(PathBuf::from);

    // The environment is consulted only for uploads
    let authorization = if args.authorization.is_some() || tracker_url.is_none() {
        args.authorization
    } else {
        config.authorization_from_env()
    };

    ReportRequest::builder()
        .project_path(project_path)
        .output(output)
        .tracker_url(tracker_url)
        .authorization(authorization)
        .dry_run(args.dry_run)
        .build()
}

fn report_dry_run(response: &ReportResponse) {
    let reporter = StderrProgressReporter::new();
    reporter.report_completion(&format!(
        "✅ Dry run: {} compile and {} development dependencies resolved, nothing written",
        response.report.compile.len(),
        response.report.development.len()
    ));
}

fn write_temporary_report(json: &str) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("npm-tracker-")
        .suffix(".json")
        .tempfile()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

fn send_report(tracker_url: &str, request: &ReportRequest, report_file: &Path) -> Result<()> {
    let client = TrackerClient::new(tracker_url, request.authorization.clone())?;
    SendReportUseCase::new(client, StderrProgressReporter::new()).execute(report_file)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. Symbolic links are not allowed."
                .to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(TrackerError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }

    #[test]
    fn test_build_request_cli_overrides_config() {
        let args = parse(&[
            "npm-tracker",
            "-o",
            "cli.json",
            "-u",
            "https://cli.example.com",
            "--authorization",
            "Bearer cli",
        ]);
        let config = ConfigFile {
            tracker_url: Some("https://config.example.com".to_string()),
            output: Some("config.json".to_string()),
            ..ConfigFile::default()
        };

        let request = build_request(args, config, PathBuf::from(".")).unwrap();
        assert_eq!(request.output, Some(PathBuf::from("cli.json")));
        assert_eq!(request.tracker_url.as_deref(), Some("https://cli.example.com"));
        assert_eq!(request.authorization.as_deref(), Some("Bearer cli"));
    }

    #[test]
    fn test_build_request_falls_back_to_config() {
        let args = parse(&["npm-tracker"]);
        let config = ConfigFile {
            tracker_url: Some("https://config.example.com/".to_string()),
            output: Some("build/report.json".to_string()),
            authorization_env: Some("NPM_TRACKER_TEST_TOKEN_MAIN".to_string()),
            ..ConfigFile::default()
        };
        std::env::set_var("NPM_TRACKER_TEST_TOKEN_MAIN", "Bearer env");

        let request = build_request(args, config, PathBuf::from(".")).unwrap();
        std::env::remove_var("NPM_TRACKER_TEST_TOKEN_MAIN");

        assert_eq!(request.output, Some(PathBuf::from("build/report.json")));
        assert!(request.tracker_url.is_some());
        assert_eq!(request.authorization.as_deref(), Some("Bearer env"));
        assert!(request.should_upload());
    }

    #[test]
    fn test_build_request_ignores_env_without_tracker() {
        let args = parse(&["npm-tracker"]);
        let config = ConfigFile {
            authorization_env: Some("NPM_TRACKER_TEST_TOKEN_UNUSED".to_string()),
            ..ConfigFile::default()
        };
        std::env::set_var("NPM_TRACKER_TEST_TOKEN_UNUSED", "Bearer env");

        let request = build_request(args, config, PathBuf::from(".")).unwrap();
        std::env::remove_var("NPM_TRACKER_TEST_TOKEN_UNUSED");

        assert!(request.authorization.is_none());
        assert!(!request.should_upload());
    }

    #[test]
    fn test_build_request_authorization_without_tracker_fails() {
        let args = parse(&["npm-tracker", "--authorization", "Bearer x"]);
        let result = build_request(args, ConfigFile::default(), PathBuf::from("."));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_temporary_report() {
        let file = write_temporary_report("{\"a\":1}").unwrap();
        let content = fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "{\"a\":1}");
        assert!(file
            .path()
            .extension()
            .is_some_and(|ext| ext == "json"));
    }
}
