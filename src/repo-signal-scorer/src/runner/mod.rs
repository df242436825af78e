//! Orchestrates repository scoring.

mod error;

pub use error::RunnerError;

use crate::config::ScorerConfig;
use crate::fetcher::{FetchError, RepoMetadataFetcher};
use crate::report::{assemble_report, ScoreReport};
use crate::scoring::score_repo_signals_at;
use crate::summary::{RunSummary, ScoreOutcome};
use crate::templates::{generate_report_file_name, TemplateError, TemplateRenderer};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn, Instrument};

/// Scores repositories end to end: fetch, score, assemble.
pub struct Runner {
    config: ScorerConfig,
    fetcher: RepoMetadataFetcher,
    renderer: TemplateRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the configuration is invalid, the GitHub
    /// client cannot be built or a custom template cannot be read.
    pub fn new(config: ScorerConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        let fetcher = RepoMetadataFetcher::new(&config)?;
        let renderer = match config.report_template() {
            Some(path) => TemplateRenderer::from_template_file(path)?,
            None => TemplateRenderer::new(),
        };

        Ok(Self {
            config,
            fetcher,
            renderer,
        })
    }

    /// Returns the configuration this runner was built with.
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Scores a single repository.
    ///
    /// The current time is captured once and used for the commit window,
    /// push recency and the reported `daysSincePush`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the URL is invalid or the mandatory
    /// repository lookup fails.
    pub async fn score_repository(&self, repo_url: &str) -> Result<ScoreReport, FetchError> {
        let span = info_span!("score_repository", url = %repo_url.trim());

        async {
            let now = Utc::now();
            let fetched = self.fetcher.fetch_at(repo_url, now).await?;
            let score = score_repo_signals_at(&fetched.facts, now);

            info!(
                repo = %fetched.identifier,
                score = score.score10,
                "Scored repository"
            );

            Ok(assemble_report(
                repo_url,
                &fetched.identifier,
                fetched.summary,
                &fetched.facts,
                score,
                now,
            ))
        }
        .instrument(span)
        .await
    }

    /// Scores a batch of repositories with bounded concurrency.
    ///
    /// Outcomes are recorded in input order. Individual failures never abort
    /// the batch.
    pub async fn score_repositories(&self, repo_urls: Vec<String>) -> RunSummary {
        let mut summary = RunSummary::new(repo_urls.len());
        info!(
            count = repo_urls.len(),
            concurrency = self.config.concurrency(),
            "Scoring repositories"
        );

        let outcomes: Vec<ScoreOutcome> = stream::iter(repo_urls)
            .map(|url| async move {
                let result = self.score_repository(&url).await;
                if let Err(e) = &result {
                    warn!(url = %url, status = e.status_code(), error = %e, "Failed to score repository");
                }
                ScoreOutcome::from_result(url, result)
            })
            .buffered(self.config.concurrency())
            .collect()
            .await;

        for outcome in outcomes {
            summary.record_outcome(outcome);
        }

        summary
    }

    /// Renders a report as Markdown with the configured template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render_markdown(&self, report: &ScoreReport) -> Result<String, TemplateError> {
        self.renderer.render_report(report, Utc::now())
    }

    /// Renders a report as Markdown and writes it into `dir`.
    ///
    /// The file is named after the repository, see
    /// [`generate_report_file_name`]. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering or writing fails.
    pub fn write_markdown_report(
        &self,
        report: &ScoreReport,
        dir: &Path,
    ) -> Result<PathBuf, TemplateError> {
        let markdown = self.render_markdown(report)?;
        let path = dir.join(generate_report_file_name(
            &report.input.owner,
            &report.input.repo,
        ));

        std::fs::write(&path, markdown).map_err(|source| TemplateError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Wrote report");
        Ok(path)
    }
}
