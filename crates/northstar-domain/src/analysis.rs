//! Analysis module - the render-ready output shape

use crate::acronym::AcronymItem;
use crate::framework::FrameworkId;
use serde::{Deserialize, Serialize};

/// One atomic bullet or paragraph extracted from a section
///
/// Carries only its text. Inline markup (emphasis asterisks and the like)
/// is preserved verbatim, never interpreted; rendering it is the UI's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// The item text, markup preserved
    pub text: String,
}

impl ContentItem {
    /// Create a content item
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A named sub-block of a framework's output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSection {
    /// Section label, e.g. "Strengths"
    pub label: String,

    /// Leading paragraph, for frameworks that carry one per section.
    /// Empty for frameworks with purely itemized sections.
    pub summary: String,

    /// Discrete items in source order
    pub items: Vec<ContentItem>,
}

impl AnalysisSection {
    /// Create an empty section for a label
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            summary: String::new(),
            items: Vec::new(),
        }
    }

    /// Whether the section carries no content at all
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.items.is_empty()
    }
}

/// The structured result of parsing one raw model completion
///
/// Always well-formed: one section entry per label of the active framework
/// in declared order, exactly nine acronym slots in canonical order, and
/// every string present (possibly empty). The rendering layer never needs
/// null checks beyond "is this list empty".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredAnalysis {
    /// The framework this analysis was parsed for
    pub framework: FrameworkId,

    /// Human-readable framework title, e.g. "SWOT Analysis"
    pub title: String,

    /// Text preceding the first recognized section marker
    pub intro: String,

    /// One entry per framework label, in declared order
    pub sections: Vec<AnalysisSection>,

    /// Trailing conclusion narrative, or empty
    pub conclusion: String,

    /// Trailing actionable-recommendations narrative, or empty
    pub recommendations: String,

    /// The nine STRATEGIC acronym slots, in canonical order
    pub acronym: Vec<AcronymItem>,
}

impl StructuredAnalysis {
    /// Whether parsing found no content anywhere
    pub fn is_empty(&self) -> bool {
        self.intro.is_empty()
            && self.conclusion.is_empty()
            && self.recommendations.is_empty()
            && self.sections.iter().all(AnalysisSection::is_empty)
            && self.acronym.iter().all(AcronymItem::is_placeholder)
    }
}
