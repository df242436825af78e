//! Report rendering using Handlebars.
//!
//! This module renders a [`ScoreReport`](crate::report::ScoreReport) into a
//! downloadable Markdown document, either with the built-in template or a
//! user-supplied one.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

/// Built-in Markdown report template.
pub const DEFAULT_REPORT_TEMPLATE: &str = include_str!("report.md.hbs");

/// Generates the file name for a downloaded report.
///
/// Format: "{owner}-{repo}-score.md"
#[must_use]
pub fn generate_report_file_name(owner: &str, repo: &str) -> String {
    format!("{owner}-{repo}-score.md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_file_name() {
        assert_eq!(
            generate_report_file_name("vercel", "next.js"),
            "vercel-next.js-score.md"
        );
    }
}
