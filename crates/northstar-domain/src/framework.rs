//! Framework module - identifiers for the supported analysis schemas

use serde::{Deserialize, Serialize};

/// Identifier for a strategic-analysis framework
///
/// Five concrete frameworks are supported; every other identifier resolves
/// to the Generic fallback so that an unrecognized id can never fail a
/// render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkId {
    /// Strengths / Weaknesses / Opportunities / Threats
    Swot,

    /// Porter's Five Forces
    Porter,

    /// BCG growth-share matrix
    Bcg,

    /// Value chain (primary and support activities)
    ValueChain,

    /// The nine-letter STRATEGIC acronym framework
    Strategic,

    /// PESTLE-style fallback for unknown identifiers
    Generic,
}

impl FrameworkId {
    /// The five concrete frameworks, in presentation order
    pub const ALL: [FrameworkId; 5] = [
        FrameworkId::Swot,
        FrameworkId::Porter,
        FrameworkId::Bcg,
        FrameworkId::ValueChain,
        FrameworkId::Strategic,
    ];

    /// Get the framework id as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkId::Swot => "swot",
            FrameworkId::Porter => "porter",
            FrameworkId::Bcg => "bcg",
            FrameworkId::ValueChain => "valuechain",
            FrameworkId::Strategic => "strategic",
            FrameworkId::Generic => "generic",
        }
    }

    /// Resolve an identifier string to a framework
    ///
    /// Case-insensitive, surrounding whitespace ignored. Unknown values
    /// resolve to [`FrameworkId::Generic`]; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use northstar_domain::FrameworkId;
    ///
    /// assert_eq!(FrameworkId::resolve("SWOT"), FrameworkId::Swot);
    /// assert_eq!(FrameworkId::resolve("noise"), FrameworkId::Generic);
    /// ```
    pub fn resolve(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "swot" => FrameworkId::Swot,
            "porter" => FrameworkId::Porter,
            "bcg" => FrameworkId::Bcg,
            "valuechain" => FrameworkId::ValueChain,
            "strategic" => FrameworkId::Strategic,
            _ => FrameworkId::Generic,
        }
    }
}

impl std::fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
