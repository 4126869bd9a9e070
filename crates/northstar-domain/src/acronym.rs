//! Acronym module - the fixed nine-slot STRATEGIC sequence

use serde::{Deserialize, Serialize};

/// The canonical letter order for the STRATEGIC acronym
///
/// Output slots always follow this sequence regardless of the order the
/// letters appear in the source text. Note the letter T occurs twice
/// (slots 2 and 5); binding is positional, never content-based.
pub const CANONICAL_SEQUENCE: [char; 9] = ['S', 'T', 'R', 'A', 'T', 'E', 'G', 'I', 'C'];

/// One slot of the STRATEGIC acronym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymItem {
    /// The slot's canonical letter
    pub letter: char,

    /// Keyword the model assigned to this letter, or empty
    pub keyword: String,

    /// Description for this letter, or empty
    pub description: String,
}

impl AcronymItem {
    /// Create a populated slot
    pub fn new(letter: char, keyword: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            letter,
            keyword: keyword.into(),
            description: description.into(),
        }
    }

    /// Create a "no data" slot for a letter
    pub fn placeholder(letter: char) -> Self {
        Self {
            letter,
            keyword: String::new(),
            description: String::new(),
        }
    }

    /// Whether this slot carries no data
    ///
    /// The rendering layer shows placeholders as "no data available".
    pub fn is_placeholder(&self) -> bool {
        self.keyword.is_empty() && self.description.is_empty()
    }
}

/// A full nine-slot placeholder sequence in canonical order
pub fn placeholders() -> Vec<AcronymItem> {
    CANONICAL_SEQUENCE
        .iter()
        .map(|&letter| AcronymItem::placeholder(letter))
        .collect()
}
