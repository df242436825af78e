//! CLI for the Repository Signal Scorer.
//!
//! This tool scores public GitHub repositories from 0 to 10 and prints the
//! report for each one as JSON or Markdown.

use clap::{Parser, ValueEnum};
use repo_signal_scorer::{
    RunSummary, Runner, RunnerError, ScoreOutcome, ScoreReport, ScorerConfig,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repository Signal Scorer - Score GitHub repositories from observable signals.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Repository URLs to score (e.g. https://github.com/vercel/next.js).
    #[arg(required = true)]
    urls: Vec<String>,

    /// Path to the config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// GitHub API base URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Maximum repositories scored at once.
    #[arg(long)]
    concurrency: Option<usize>,

    /// Output format for each report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Also write each Markdown report to this directory as `{owner}-{repo}-score.md`.
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

/// Report output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Markdown rendered from the report template.
    Markdown,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();
    let format = args.format;
    let output_dir = args.output_dir.clone();

    // Run the main logic
    match run(args).await {
        Ok((runner, summary)) => {
            print_outcomes(&runner, &summary, format);
            let write_failures = output_dir
                .as_deref()
                .map_or(0, |dir| write_reports(&runner, &summary, dir));
            print_summary(&summary);

            if summary.has_failures() || write_failures > 0 {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so reports on stdout stay machine-readable. The level
/// is taken from `RUST_LOG`, defaulting to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        // Use compact formatting without module target paths for cleaner output
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        // Falls back to "info" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(Runner, RunSummary), RunnerError> {
    let mut config = ScorerConfig::load(Some(&args.config))?;
    if let Some(token) = args.token.filter(|t| !t.trim().is_empty()) {
        config = config.with_token(token);
    }
    if let Some(url) = args.api_url {
        config = config.with_api_base_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    if let Some(concurrency) = args.concurrency {
        config = config.with_concurrency(concurrency);
    }

    let runner = Runner::new(config)?;
    let summary = runner.score_repositories(args.urls).await;
    Ok((runner, summary))
}

/// Prints each report to stdout and each failure to stderr.
fn print_outcomes(runner: &Runner, summary: &RunSummary, format: OutputFormat) {
    for outcome in &summary.outcomes {
        match outcome {
            ScoreOutcome::Scored { repository, report } => {
                match render(runner, report, format) {
                    Ok(output) => println!("{output}"),
                    Err(message) => {
                        error!(url = %repository, error = %message, "Failed to render report");
                    }
                }
            }
            ScoreOutcome::Failed {
                repository, status, ..
            } => {
                let body = outcome
                    .error_body()
                    .and_then(|body| serde_json::to_string(&body).ok())
                    .unwrap_or_default();
                eprintln!("{repository} [{status}] {body}");
            }
        }
    }
}

/// Writes each scored report into `dir`, returning the number of failures.
fn write_reports(runner: &Runner, summary: &RunSummary, dir: &Path) -> usize {
    let mut failures = 0;
    for outcome in &summary.outcomes {
        if let ScoreOutcome::Scored { repository, report } = outcome {
            match runner.write_markdown_report(report, dir) {
                Ok(path) => info!(url = %repository, path = %path.display(), "Saved report"),
                Err(e) => {
                    error!(url = %repository, error = %e, "Failed to save report");
                    failures += 1;
                }
            }
        }
    }
    failures
}

fn render(runner: &Runner, report: &ScoreReport, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(|e| e.to_string()),
        OutputFormat::Markdown => runner.render_markdown(report).map_err(|e| e.to_string()),
    }
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    eprintln!("\nSummary:");
    eprintln!("  Repositories requested: {}", summary.repositories_requested);
    eprintln!("  Repositories scored: {}", summary.repositories_scored);
    eprintln!("  Repositories failed: {}", summary.repositories_failed);
    if let Some(average) = summary.average_score() {
        eprintln!("  Average score: {average:.1}/10");
    }
}
