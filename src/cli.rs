use clap::Parser;

/// Create dependency tracker reports for npm projects
#[derive(Parser, Debug)]
#[command(name = "npm-tracker")]
#[command(version)]
#[command(
    about = "Create dependency tracker reports for npm projects",
    long_about = "Reads package.json and package-lock.json, classifies every locked package \
                  as compile or development dependency, traces each transitive package back \
                  to a direct dependency and writes the result as a tracker report. \
                  With --tracker-url the report is uploaded to <URL>/report/upload."
)]
pub struct Args {
    /// Path to the npm project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Report output file (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Tracker base URL; the report is uploaded to <URL>/report/upload
    #[arg(short = 'u', long, value_name = "URL")]
    pub tracker_url: Option<String>,

    /// Authorization header value sent with the upload
    #[arg(long, value_name = "VALUE")]
    pub authorization: Option<String>,

    /// Config file (defaults to npm-tracker.config.yml in the project directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Resolve and validate only; do not write or upload the report
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
