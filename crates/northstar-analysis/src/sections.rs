//! Ordered-marker section scanner
//!
//! The `regex` crate has no look-around, so section boundaries are found by
//! scanning for every marker's position explicitly: a section runs from the
//! end of its own marker to the earliest following occurrence of any other
//! label or trailer marker, or end of text.

use crate::frameworks::CompiledFramework;
use regex::Regex;

/// Heading tail words tolerated between a label and its colon,
/// e.g. `**SWOT Analysis:**` or `**STRATEGIC Framework:**`.
/// Kept as an explicit constant for the same auditability reason as the
/// label lists themselves.
const HEADING_TAIL: &str = "(?:[ \\t]+(?:Analysis|Framework|Matrix|Acronym|Assessment))*";

/// Compile the tolerant marker regex for one label or trailer keyword
///
/// Tolerates: emphasis runs of any length on either side, whitespace around
/// the colon, a missing colon, an optional parenthetical after the label,
/// a bullet prefix at line start, and any casing. Mid-line occurrences are
/// only recognized when emphasis asterisks precede the label, so plain
/// prose mentions do not split sections.
pub(crate) fn marker_regex(label: &str) -> Regex {
    let escaped = regex::escape(label);
    let pattern = format!(
        r"(?im)(?:^[ \t]*(?:[-•][ \t]*)?\**|\*+)[ \t]*{escaped}\b(?:[ \t]*\([^)\n]*\))?{HEADING_TAIL}[ \t]*:?[ \t]*\**[ \t]*:?"
    );
    Regex::new(&pattern).expect("marker pattern is built from escaped input")
}

/// One label's captured raw content
#[derive(Debug, Clone)]
pub(crate) struct RawSection {
    /// The label this content belongs to
    pub label: &'static str,

    /// Raw captured text, trimmed; empty when the label was absent
    pub content: String,
}

/// Extract one entry per label, in the framework's declared order
///
/// A label with no match yields an empty string entry, never a missing one,
/// so callers need no special case for absent sections.
pub(crate) fn extract_sections(text: &str, framework: &CompiledFramework) -> Vec<RawSection> {
    framework
        .spec
        .labels
        .iter()
        .enumerate()
        .map(|(idx, &label)| {
            let content = match framework.label_markers[idx].find(text) {
                Some(m) => {
                    let start = m.end();
                    let end = terminator_position(text, start, framework, idx);
                    text[start..end].trim().to_string()
                }
                None => String::new(),
            };
            RawSection { label, content }
        })
        .collect()
}

/// Earliest marker occurrence at or after `start`, excluding the label's own
fn terminator_position(
    text: &str,
    start: usize,
    framework: &CompiledFramework,
    own_label: usize,
) -> usize {
    let mut end = text.len();
    for (idx, marker) in framework.label_markers.iter().enumerate() {
        if idx == own_label {
            continue;
        }
        if let Some(m) = marker.find_at(text, start) {
            end = end.min(m.start());
        }
    }
    for marker in &framework.trailer_markers {
        if let Some(m) = marker.find_at(text, start) {
            end = end.min(m.start());
        }
    }
    end
}

/// Start offset of the earliest label marker, for intro extraction
pub(crate) fn first_marker_position(text: &str, framework: &CompiledFramework) -> Option<usize> {
    framework
        .label_markers
        .iter()
        .filter_map(|marker| marker.find(text).map(|m| m.start()))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::CompiledFramework;
    use northstar_domain::FrameworkId;

    fn swot() -> &'static CompiledFramework {
        CompiledFramework::resolve(FrameworkId::Swot)
    }

    #[test]
    fn test_canonical_bold_markers() {
        let text = "**Strengths:** A\n**Weaknesses:** B\n**Opportunities:** C\n**Threats:** D";
        let sections = extract_sections(text, swot());
        let contents: Vec<&str> = sections.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_marker_tolerates_spacing_and_case() {
        let text = "** strengths : ** A\nWEAKNESSES: B";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[0].content, "A");
        assert_eq!(sections[1].content, "B");
    }

    #[test]
    fn test_marker_tolerates_parenthetical() {
        let text = "**Strengths (internal):** A\n**Weaknesses (internal):** B";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[0].content, "A");
        assert_eq!(sections[1].content, "B");
    }

    #[test]
    fn test_marker_tolerates_heading_tail() {
        let text = "**Strengths Assessment:** A\n**Weaknesses:** B";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[0].content, "A");
    }

    #[test]
    fn test_absent_label_yields_empty_entry() {
        let text = "**Strengths:** A";
        let sections = extract_sections(text, swot());
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].content, "A");
        assert_eq!(sections[1].content, "");
        assert_eq!(sections[2].content, "");
        assert_eq!(sections[3].content, "");
    }

    #[test]
    fn test_trailer_bounds_last_section() {
        let text = "**Threats:** D\n**Conclusion:** wrap up";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[3].content, "D");
    }

    #[test]
    fn test_free_text_conclusion_bounds_section() {
        let text = "**Threats:** D\nIn conclusion, things look fine";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[3].content, "D");
    }

    #[test]
    fn test_out_of_order_labels() {
        let text = "**Threats:** D\n**Strengths:** A";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[0].content, "A");
        assert_eq!(sections[3].content, "D");
    }

    #[test]
    fn test_prose_mention_does_not_split_mid_line() {
        let text = "**Strengths:** the threats we face are modest\n**Weaknesses:** B";
        let sections = extract_sections(text, swot());
        assert_eq!(sections[0].content, "the threats we face are modest");
    }

    #[test]
    fn test_first_marker_position() {
        let text = "an intro paragraph\n**Strengths:** A";
        let pos = first_marker_position(text, swot()).unwrap();
        assert_eq!(text[..pos].trim_end(), "an intro paragraph");
    }
}
