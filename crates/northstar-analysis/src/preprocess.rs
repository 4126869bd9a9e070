//! Text preprocessing - line normalization and conclusion-leak cleanup

use once_cell::sync::Lazy;
use regex::Regex;

/// Collapse escaped `\n` sequences, CRLF, and bare CR to canonical newlines
pub(crate) fn normalize_line_breaks(text: &str) -> String {
    text.replace("\\n", "\n")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}

/// Built-in conclusion-leak lead-ins, most specific first.
///
/// Rule order is significant: later rules assume the better-marked variants
/// were already removed by earlier ones. Each rule truncates the text at
/// its first match, which is how trailing narrative that bled into a
/// section through malformed emphasis gets cut away.
static LEAK_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // emphasis-wrapped heading, any run length on each side
        r"(?i)\*{2,}[ \t]*conclusion[ \t]*:?[ \t]*\*{2,}",
        // single emphasis run with a colon
        r"(?i)\*+[ \t]*conclusion[ \t]*:",
        // plain heading at line start
        r"(?im)^[ \t]*conclusion[ \t]*:",
        // free-text lead-ins
        r"(?i)\bin[ \t]+conclusion\b",
        r"(?i)\bgiven[ \t]+the[ \t]+incomplete\b",
        r"(?i)\bto[ \t]+drive[ \t]+success\b",
        // trailing recommendations block
        r"(?i)\**[ \t]*\bactionable[ \t]+recommendations\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("built-in leak rule"))
    .collect()
});

/// Remove conclusion/recommendations material that leaked past its heading
///
/// Applied to the whole document before section extraction and again to
/// each captured section, since malformed input can leak mid-section even
/// when the document-level pass missed it.
pub(crate) fn strip_leaks(text: &str, extra_rules: &[Regex]) -> String {
    LEAK_RULES
        .iter()
        .chain(extra_rules.iter())
        .fold(text.to_string(), |acc, rule| match rule.find(&acc) {
            Some(m) => acc[..m.start()].trim_end().to_string(),
            None => acc,
        })
}
