//! Message Service - main application orchestrator.
//!
//! This service coordinates the message workflow:
//! 1. Load and merge values from every configured source
//! 2. Interpolate the template (lenient or strict)
//! 3. Optionally compose the result with a payload
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::ValueSource,
    domain::{Template, Values, compose},
    error::HeraldResult,
};

/// Outcome of a lenient render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Interpolated text (the untouched template on fallback).
    pub output: String,
    /// Distinct placeholder names left as written.
    pub unresolved: Vec<String>,
    /// `true` when the template had an unterminated marker and was passed through.
    pub fell_back: bool,
}

/// Main message service.
///
/// Sources are merged in insertion order; a key in a later source overrides
/// the same key from an earlier one.
pub struct MessageService {
    sources: Vec<Box<dyn ValueSource>>,
}

impl MessageService {
    /// Create a service over the given sources.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use herald_core::application::MessageService;
    ///
    /// let service = MessageService::new(vec![
    ///     Box::new(file_source), // impl ValueSource
    ///     Box::new(cli_pairs),   // overrides the file
    /// ]);
    /// ```
    pub fn new(sources: Vec<Box<dyn ValueSource>>) -> Self {
        Self { sources }
    }

    /// Append a source with the highest precedence so far.
    pub fn with_source(mut self, source: Box<dyn ValueSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Load every source and merge them.
    #[instrument(skip_all, fields(sources = self.sources.len()))]
    pub fn values(&self) -> HeraldResult<Values> {
        let mut merged = Values::new();
        for source in &self.sources {
            let loaded = source.load()?;
            debug!(source = %source.describe(), count = loaded.len(), "values loaded");
            merged.merge(loaded);
        }
        Ok(merged)
    }

    /// Interpolate `template` with the merged values.
    ///
    /// Never fails on template syntax: an unterminated marker yields the
    /// template unchanged with [`Rendered::fell_back`] set. Source errors are
    /// propagated.
    #[instrument(skip_all)]
    pub fn interpolate(&self, template: &str) -> HeraldResult<Rendered> {
        let values = self.values()?;
        Ok(Self::render_with(template, &values))
    }

    /// Interpolate, failing on syntax errors and on placeholders without a value.
    #[instrument(skip_all)]
    pub fn interpolate_strict(&self, template: &str) -> HeraldResult<String> {
        let parsed = Template::parse(template)?;
        let values = self.values()?;
        Ok(parsed.render_strict(&values)?)
    }

    /// Lenient render against an explicit map, bypassing the sources.
    pub fn render_with(template: &str, values: &Values) -> Rendered {
        match Template::parse(template) {
            Ok(parsed) => {
                let unresolved: Vec<String> = parsed
                    .unresolved(values)
                    .into_iter()
                    .map(str::to_owned)
                    .collect();
                if !unresolved.is_empty() {
                    info!(?unresolved, "placeholders left unresolved");
                }
                Rendered {
                    output: parsed.render(values),
                    unresolved,
                    fell_back: false,
                }
            }
            Err(err) => {
                warn!(error = %err, "template passed through unchanged");
                Rendered {
                    output: template.to_owned(),
                    unresolved: Vec::new(),
                    fell_back: true,
                }
            }
        }
    }

    /// Join `payload` and `display_text`.
    pub fn compose(&self, display_text: &str, payload: &str) -> String {
        compose(display_text, payload)
    }

    /// Interpolate `template` leniently, then compose it with `payload`.
    #[instrument(skip_all)]
    pub fn compose_from_template(&self, template: &str, payload: &str) -> HeraldResult<String> {
        let rendered = self.interpolate(template)?;
        Ok(compose(&rendered.output, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockValueSource};
    use crate::domain::{DELIMITER, DomainError};
    use crate::error::HeraldError;

    fn source_with(pairs: &'static [(&'static str, &'static str)]) -> Box<dyn ValueSource> {
        let mut mock = MockValueSource::new();
        mock.expect_describe().return_const("mock".to_string());
        mock.expect_load()
            .returning(move || Ok(pairs.iter().copied().collect()));
        Box::new(mock)
    }

    #[test]
    fn later_sources_override_earlier() {
        let service = MessageService::new(vec![
            source_with(&[("name", "file"), ("age", "95")]),
            source_with(&[("name", "flag")]),
        ]);
        let values = service.values().unwrap();
        assert_eq!(values.get("name"), Some("flag"));
        assert_eq!(values.get("age"), Some("95"));
    }

    #[test]
    fn interpolate_reports_unresolved() {
        let service = MessageService::new(vec![source_with(&[("b", "middle")])]);
        let rendered = service
            .interpolate("${a} and ${b} are sitting in a ${c}")
            .unwrap();
        assert_eq!(rendered.output, "${a} and middle are sitting in a ${c}");
        assert_eq!(rendered.unresolved, vec!["a".to_string(), "c".to_string()]);
        assert!(!rendered.fell_back);
    }

    #[test]
    fn interpolate_falls_back_on_unterminated_marker() {
        let service = MessageService::new(vec![source_with(&[("a", "x")])]);
        let rendered = service.interpolate("${a} ${b").unwrap();
        assert_eq!(rendered.output, "${a} ${b");
        assert!(rendered.fell_back);
    }

    #[test]
    fn strict_rejects_syntax_before_loading_sources() {
        let mut mock = MockValueSource::new();
        mock.expect_load().never();
        let service = MessageService::new(vec![Box::new(mock)]);
        assert!(matches!(
            service.interpolate_strict("${oops"),
            Err(HeraldError::Domain(DomainError::UnterminatedPlaceholder { position: 0 }))
        ));
    }

    #[test]
    fn strict_rejects_missing_values() {
        let service = MessageService::new(vec![source_with(&[])]);
        assert!(matches!(
            service.interpolate_strict("hi ${who}"),
            Err(HeraldError::Domain(DomainError::UnresolvedPlaceholders { .. }))
        ));
    }

    #[test]
    fn source_errors_propagate() {
        let mut mock = MockValueSource::new();
        mock.expect_describe().return_const("broken".to_string());
        mock.expect_load().returning(|| {
            Err(ApplicationError::SourceUnavailable {
                source_name: "broken".into(),
                reason: "gone".into(),
            }
            .into())
        });
        let service = MessageService::new(Vec::new()).with_source(Box::new(mock));
        assert_eq!(service.source_count(), 1);
        assert!(service.interpolate("${x}").is_err());
    }

    #[test]
    fn compose_needs_no_sources() {
        let service = MessageService::new(Vec::new());
        assert_eq!(service.compose("hi", "{}"), format!("{{}}{DELIMITER}hi"));
    }

    #[test]
    fn compose_from_template_interpolates_display_text() {
        let service = MessageService::new(vec![source_with(&[("who", "Luz")])]);
        let wire = service
            .compose_from_template("Welcome ${who}", "{\"id\":7}")
            .unwrap();
        assert_eq!(wire, format!("{{\"id\":7}}{DELIMITER}Welcome Luz"));
    }
}
