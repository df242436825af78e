//! Template renderer.

use super::{TemplateError, DEFAULT_REPORT_TEMPLATE};
use crate::report::ScoreReport;
use chrono::{DateTime, SecondsFormat, Utc};
use handlebars::{handlebars_helper, no_escape, Handlebars};
use serde_json::Value;
use std::path::Path;

handlebars_helper!(yes_no: |flag: bool| if flag { "yes" } else { "no" });
handlebars_helper!(code_fence: |text: str| code_fence_for(text));

/// Backtick fence longer than any backtick run in `text`, at least three.
fn code_fence_for(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `yes_no` helper for boolean signals
/// - `code_fence` helper for wrapping free text in a code block
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs.register_helper("yes_no", Box::new(yes_no));
    hbs.register_helper("code_fence", Box::new(code_fence));

    hbs
}

/// Renders score reports to Markdown.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    template: String,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a renderer using the built-in report template.
    #[must_use]
    pub fn new() -> Self {
        Self::with_template(DEFAULT_REPORT_TEMPLATE)
    }

    /// Creates a renderer using the given template source.
    #[must_use]
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            template: template.into(),
        }
    }

    /// Creates a renderer using a template read from disk.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::IoError`] if the file cannot be read.
    pub fn from_template_file(path: &Path) -> Result<Self, TemplateError> {
        let template = std::fs::read_to_string(path).map_err(|source| TemplateError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::with_template(template))
    }

    /// Renders a report.
    ///
    /// The template sees the report's JSON form plus a `generated_at`
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is invalid or references a value the
    /// report does not have.
    pub fn render_report(
        &self,
        report: &ScoreReport,
        generated_at: DateTime<Utc>,
    ) -> Result<String, TemplateError> {
        let mut data = serde_json::to_value(report)?;
        if let Value::Object(fields) = &mut data {
            fields.insert(
                "generated_at".to_string(),
                Value::String(generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            );
        }

        self.render_template(&data)
    }

    /// Renders the configured template with the given data.
    fn render_template(&self, data: &Value) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(&self.template, data)?)
    }
}
