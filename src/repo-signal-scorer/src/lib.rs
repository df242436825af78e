#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fetcher;
pub mod report;
pub mod repository;
pub mod runner;
pub mod scoring;
pub mod summary;
pub mod templates;

pub use config::{ConfigError, ScorerConfig};
pub use fetcher::{
    ErrorBody, FetchError, FetchedRepository, RepoFacts, RepoMetadataFetcher, RepoSummary,
};
pub use report::{
    assemble_report, LanguageShare, ReportInput, ReportSignals, ReportSummary, ScoreReport,
};
pub use repository::{InvalidUrlError, RepoIdentifier};
pub use runner::{Runner, RunnerError};
pub use scoring::{score_repo_signals, score_repo_signals_at, ScoreBreakdown, SubScores};
pub use summary::{RunSummary, ScoreOutcome};
pub use templates::{
    create_handlebars_registry, generate_report_file_name, TemplateError, TemplateRenderer,
};
