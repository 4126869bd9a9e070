//! STRATEGIC acronym parsing - nine canonical slots from free text
//!
//! The model lists the letters in whatever order it likes, may omit some,
//! and lists the letter T twice with different keywords. Parsed entries are
//! therefore kept in source order and bound to the canonical sequence
//! first-in-first-out per letter: the k-th canonical occurrence of a letter
//! consumes the k-th parsed entry tagged with it. Binding is positional,
//! never content-based.

use crate::frameworks;
use crate::sections;
use northstar_domain::acronym::{self, AcronymItem, CANONICAL_SEQUENCE};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// `<letter> - **keyword**: description`, tolerating one or two emphasis
/// asterisks or none at all
static ENTRY_WITH_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([a-z])[ \t]*[-–—][ \t]*\*{0,2}[ \t]*([^:*\n]+?)[ \t]*\*{0,2}[ \t]*:[ \t]*(.+)$")
        .unwrap()
});

/// `<letter> - description` with no keyword
static ENTRY_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-z])[ \t]*[-–—][ \t]*(.+)$").unwrap());

/// Bullet-prefixed variant of the keyword form
static ENTRY_BULLETED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[-•*][ \t]*([a-z])[ \t]*[-–—][ \t]*\*{0,2}[ \t]*([^:*\n]+?)[ \t]*\*{0,2}[ \t]*:[ \t]*(.+)$",
    )
    .unwrap()
});

/// One parsed line, tagged with its (uppercased) letter
#[derive(Debug)]
struct ParsedEntry {
    letter: char,
    keyword: String,
    description: String,
}

/// Result of one acronym parse
#[derive(Debug)]
pub(crate) struct AcronymOutcome {
    /// Exactly nine slots in canonical order
    pub slots: Vec<AcronymItem>,

    /// Lines inside the block no pattern recognized
    pub unmatched_lines: Vec<String>,
}

/// Parse the STRATEGIC block out of a full document
///
/// An absent block yields nine placeholders; this never fails and never
/// returns fewer than nine slots.
pub(crate) fn parse_acronym(text: &str) -> AcronymOutcome {
    let block = frameworks::acronym_block();
    let content = sections::extract_sections(text, block)
        .into_iter()
        .next()
        .map(|s| s.content)
        .unwrap_or_default();

    if content.is_empty() {
        return AcronymOutcome {
            slots: acronym::placeholders(),
            unmatched_lines: Vec::new(),
        };
    }

    let mut entries = Vec::new();
    let mut unmatched = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.chars().all(|c| c == '*') {
            continue;
        }
        match parse_line(line) {
            Some(entry) => entries.push(entry),
            None => {
                warn!("Unparsed acronym line: {}", line);
                unmatched.push(line.to_string());
            }
        }
    }

    AcronymOutcome {
        slots: bind_slots(entries),
        unmatched_lines: unmatched,
    }
}

/// Try the line patterns in decreasing specificity; first match wins
fn parse_line(line: &str) -> Option<ParsedEntry> {
    if let Some(caps) = ENTRY_WITH_KEYWORD.captures(line) {
        return Some(ParsedEntry {
            letter: first_letter(&caps[1]),
            keyword: caps[2].trim().to_string(),
            description: caps[3].trim().to_string(),
        });
    }
    if let Some(caps) = ENTRY_BARE.captures(line) {
        return Some(ParsedEntry {
            letter: first_letter(&caps[1]),
            keyword: String::new(),
            description: caps[2].trim().to_string(),
        });
    }
    if let Some(caps) = ENTRY_BULLETED.captures(line) {
        return Some(ParsedEntry {
            letter: first_letter(&caps[1]),
            keyword: caps[2].trim().to_string(),
            description: caps[3].trim().to_string(),
        });
    }
    None
}

fn first_letter(s: &str) -> char {
    s.chars().next().unwrap_or(' ').to_ascii_uppercase()
}

/// Bind parsed entries to the canonical sequence, FIFO per letter
fn bind_slots(entries: Vec<ParsedEntry>) -> Vec<AcronymItem> {
    let mut pool: Vec<Option<ParsedEntry>> = entries.into_iter().map(Some).collect();
    CANONICAL_SEQUENCE
        .iter()
        .map(|&letter| {
            let next = pool
                .iter_mut()
                .find(|slot| slot.as_ref().is_some_and(|e| e.letter == letter))
                .and_then(Option::take);
            match next {
                Some(e) => AcronymItem::new(letter, e.keyword, e.description),
                None => AcronymItem::placeholder(letter),
            }
        })
        .collect()
}
