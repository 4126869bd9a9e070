//! Shape-driven section segmentation
//!
//! Turns one section's raw text into discrete items (and, for frameworks
//! that carry one, a leading summary paragraph). Line cleanup here is the
//! second, line-level defense against conclusion leakage, independent of
//! the document-level stripping in [`crate::preprocess`].

use crate::frameworks::SectionShape;
use northstar_domain::ContentItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// Leading bullet markers: `-`, `•`, `<digits>.`, or `* ` with a space so
/// that inline emphasis like `*word*` survives untouched
static BULLET_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.[ \t]*|[-•][ \t]*|\*[ \t]+)").unwrap());

static ASTERISKS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*+$").unwrap());

/// Line-level conclusion-leak markers
static LEAK_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bconclusion\b|\bgiven[ \t]+the[ \t]+incomplete\b|\bto[ \t]+drive[ \t]+success\b")
        .unwrap()
});

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// A section's segmented content
#[derive(Debug, Clone, Default)]
pub(crate) struct SegmentedSection {
    /// Leading paragraph; empty for the itemized shape
    pub summary: String,

    /// Discrete items in source order
    pub items: Vec<ContentItem>,
}

/// Segment one section's cleaned raw text according to its shape
pub(crate) fn segment(
    content: &str,
    shape: SectionShape,
    extra_rules: &[Regex],
) -> SegmentedSection {
    match shape {
        SectionShape::Itemized => SegmentedSection {
            summary: String::new(),
            items: items_from(content, extra_rules),
        },
        SectionShape::SummaryAndItems => {
            let (summary, rest) = split_first_paragraph(content);
            SegmentedSection {
                summary: summary.trim().to_string(),
                items: items_from(rest, extra_rules),
            }
        }
    }
}

/// Split at the first blank line; no blank line means all summary, no items
fn split_first_paragraph(content: &str) -> (&str, &str) {
    match BLANK_LINE.find(content) {
        Some(m) => (&content[..m.start()], &content[m.end()..]),
        None => (content, ""),
    }
}

fn items_from(text: &str, extra_rules: &[Regex]) -> Vec<ContentItem> {
    text.lines()
        .filter_map(|line| clean_line(line, extra_rules))
        .map(ContentItem::new)
        .collect()
}

/// Trim, strip one leading bullet marker, and drop lines that carry no
/// renderable content or that are leaked trailing narrative
fn clean_line(line: &str, extra_rules: &[Regex]) -> Option<String> {
    let stripped = BULLET_PREFIX.replace(line.trim(), "");
    let text = stripped.trim();
    if text.is_empty() || ASTERISKS_ONLY.is_match(text) {
        return None;
    }
    if LEAK_LINE.is_match(text) || extra_rules.iter().any(|rule| rule.is_match(text)) {
        return None;
    }
    Some(text.to_string())
}
