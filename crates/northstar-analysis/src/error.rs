//! Error types for the analysis engine
//!
//! Parsing itself is infallible: the input space is untrusted free text
//! from a generative model, so malformed input degrades to empty or
//! placeholder structures instead of surfacing errors. The variants here
//! cover the configuration edge only.

use thiserror::Error;

/// Errors that can occur while constructing a parser
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A caller-supplied cleanup pattern failed to compile
    #[error("Invalid cleanup pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        /// The compile error reported by the regex engine
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
