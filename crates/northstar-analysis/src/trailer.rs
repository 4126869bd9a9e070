//! Trailing narrative extraction - conclusion and recommendations
//!
//! Both extractors run against the original (pre-cleanup) document: the
//! document-level leak stripping removes exactly the material these two
//! capture.

use crate::sections::marker_regex;
use once_cell::sync::Lazy;
use regex::Regex;

/// Conclusion lead-ins, most malformed first. The first match wins; later
/// patterns are not tried once one succeeds.
static CONCLUSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // runs of two or more asterisks on each side, colon optional
        r"(?is)\*{2,}[ \t]*conclusion[ \t]*\*{2,}[ \t]*:?[ \t]*(.*)$",
        // canonical bold with the colon inside the emphasis
        r"(?is)\*\*[ \t]*conclusion[ \t]*:[ \t]*\*\*[ \t]*(.*)$",
        // bold without a colon, or with the colon after the emphasis
        r"(?is)\*\*[ \t]*conclusion[ \t]*\*\*[ \t]*:?[ \t]*(.*)$",
        // plain heading, no emphasis at all
        r"(?is)(?m:^)[ \t]*conclusion[ \t]*:[ \t]*(.*)$",
        // free-text lead-in
        r"(?is)(?m:^)[ \t]*in[ \t]+conclusion[,:]?[ \t]*(.*)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("conclusion pattern"))
    .collect()
});

/// The "Actionable Recommendations" marker, arbitrary emphasis
static RECOMMENDATIONS_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\**[ \t]*\bactionable[ \t]+recommendations\b[ \t]*:?[ \t]*\**[ \t]*:?[ \t]*")
        .unwrap()
});

/// Residue a malformed heading leaves at the start of a capture
static RESIDUAL_LEAD_IN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[:\s]+|\*+[:\s]+)+").unwrap());

/// The acronym block heading; the model appends the block after the
/// trailing narrative, so it bounds both captures here
static ACRONYM_HEADING: Lazy<Regex> = Lazy::new(|| marker_regex("STRATEGIC"));

/// Extract the conclusion narrative, or empty when nothing matches
pub(crate) fn extract_conclusion(text: &str) -> String {
    for pattern in CONCLUSION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let capture = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            return finish_capture(capture);
        }
    }
    String::new()
}

/// Bound the capture at the recommendations marker or the acronym heading,
/// whichever comes first, and drop heading residue
fn finish_capture(capture: &str) -> String {
    let bounded = &capture[..trailing_block_position(capture)];
    RESIDUAL_LEAD_IN.replace(bounded, "").trim().to_string()
}

/// Extract everything after the "Actionable Recommendations" marker
pub(crate) fn extract_recommendations(text: &str) -> String {
    match RECOMMENDATIONS_MARKER.find(text) {
        Some(m) => {
            let tail = &text[m.end()..];
            tail[..acronym_heading_position(tail)].trim().to_string()
        }
        None => String::new(),
    }
}

fn trailing_block_position(text: &str) -> usize {
    let recommendations = RECOMMENDATIONS_MARKER
        .find(text)
        .map(|m| m.start())
        .unwrap_or(text.len());
    recommendations.min(acronym_heading_position(text))
}

fn acronym_heading_position(text: &str) -> usize {
    ACRONYM_HEADING
        .find(text)
        .map(|m| m.start())
        .unwrap_or(text.len())
}
