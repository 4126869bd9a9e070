//! Core parser implementation - composes the extraction pipeline

use crate::config::ParserConfig;
use crate::error::AnalysisError;
use crate::frameworks::CompiledFramework;
use crate::preprocess::{normalize_line_breaks, strip_leaks};
use crate::sections;
use crate::segment::segment;
use crate::trailer::{extract_conclusion, extract_recommendations};
use crate::{acronym, AnalysisSection, FrameworkId, StructuredAnalysis};
use regex::Regex;
use tracing::{debug, warn};

/// Diagnostics collected during one parse call
///
/// Tolerated anomalies never fail a parse; callers that want to surface or
/// log them read this instead of the engine writing to a console.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    /// Acronym-block lines no pattern recognized
    pub unmatched_lines: Vec<String>,

    /// Whether oversized input was truncated before parsing
    pub truncated: bool,
}

/// The parser converts one raw model completion into a render-ready
/// [`StructuredAnalysis`]
///
/// Stateless across calls: the same `(framework_id, raw_text)` pair always
/// yields a structurally identical result, and concurrent use needs no
/// coordination.
pub struct AnalysisParser {
    config: ParserConfig,
    extra_rules: Vec<Regex>,
}

impl AnalysisParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
            extra_rules: Vec::new(),
        }
    }

    /// Create a parser with a custom configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or an extra leak
    /// pattern fails to compile.
    pub fn with_config(config: ParserConfig) -> Result<Self, AnalysisError> {
        config.validate().map_err(AnalysisError::Config)?;
        let extra_rules = config
            .extra_leak_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| AnalysisError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            config,
            extra_rules,
        })
    }

    /// Parse one raw completion for a framework
    ///
    /// Unknown framework ids resolve to the Generic fallback; malformed or
    /// empty input degrades to an empty-but-well-formed structure. This
    /// never fails.
    pub fn parse(&self, framework_id: &str, raw_text: &str) -> StructuredAnalysis {
        self.parse_with_report(framework_id, raw_text).0
    }

    /// Parse and also return the diagnostics collected along the way
    pub fn parse_with_report(
        &self,
        framework_id: &str,
        raw_text: &str,
    ) -> (StructuredAnalysis, ParseReport) {
        let mut report = ParseReport::default();
        let framework = FrameworkId::resolve(framework_id);
        let compiled = CompiledFramework::resolve(framework);

        let bounded = self.bound_input(raw_text, &mut report);
        let normalized = normalize_line_breaks(bounded);
        let document = strip_leaks(&normalized, &self.extra_rules);

        debug!(
            framework = %framework,
            chars = document.len(),
            "parsing analysis text"
        );

        let intro = match sections::first_marker_position(&document, compiled) {
            Some(pos) if pos > 0 => document[..pos].trim().to_string(),
            _ => String::new(),
        };

        let parsed_sections = sections::extract_sections(&document, compiled)
            .into_iter()
            .map(|raw| {
                // second cleanup pass: leakage can survive inside a single
                // captured section even when the document pass missed it
                let cleaned = strip_leaks(&raw.content, &self.extra_rules);
                let segmented = segment(&cleaned, compiled.spec.shape, &self.extra_rules);
                AnalysisSection {
                    label: raw.label.to_string(),
                    summary: segmented.summary,
                    items: segmented.items,
                }
            })
            .collect();

        // trailing narrative and the acronym block read from the
        // pre-cleanup text: document-level stripping removes exactly the
        // material they capture, and the acronym block must survive even
        // when the primary framework's boundaries discarded trailing text
        let conclusion = extract_conclusion(&normalized);
        let recommendations = extract_recommendations(&normalized);
        let outcome = acronym::parse_acronym(&normalized);
        report.unmatched_lines = outcome.unmatched_lines;

        debug!(
            framework = %framework,
            sections = compiled.spec.labels.len(),
            unmatched = report.unmatched_lines.len(),
            "parse complete"
        );

        let analysis = StructuredAnalysis {
            framework,
            title: compiled.spec.title.to_string(),
            intro,
            sections: parsed_sections,
            conclusion,
            recommendations,
            acronym: outcome.slots,
        };
        (analysis, report)
    }

    /// Cap runaway input at a char boundary instead of rejecting it
    fn bound_input<'a>(&self, text: &'a str, report: &mut ParseReport) -> &'a str {
        match text.char_indices().nth(self.config.max_text_length) {
            None => text,
            Some((cut, _)) => {
                warn!(
                    limit = self.config.max_text_length,
                    "input exceeds configured length, truncating"
                );
                report.truncated = true;
                &text[..cut]
            }
        }
    }
}

impl Default for AnalysisParser {
    fn default() -> Self {
        Self::new()
    }
}
