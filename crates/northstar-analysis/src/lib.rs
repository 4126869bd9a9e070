//! Northstar Analysis Engine
//!
//! Converts one raw, loosely formatted model completion into a
//! deterministic, render-ready [`StructuredAnalysis`], per strategic
//! framework.
//!
//! # Overview
//!
//! The generative model returns a single block of semi-markdown free text
//! per framework, with no format guarantee: emphasis runs of arbitrary
//! length, trailing narrative bleeding into sections, acronym letters out
//! of order or duplicated, sections missing entirely. This crate is the
//! set of rules that carves such a blob into the sections a UI can render,
//! without ever failing.
//!
//! # Architecture
//!
//! ```text
//! Raw text → Preprocess → Section scan → Segment → StructuredAnalysis
//!                 │                                       ▲
//!                 └── Conclusion / Recommendations / Acronym
//!                     (run against the original text) ────┘
//! ```
//!
//! # Key Features
//!
//! - **Tolerant boundaries**: section markers match through inconsistent
//!   emphasis, spacing, casing, and parentheticals
//! - **Two-layer leak defense**: trailing conclusion text is stripped at
//!   document level and again per line
//! - **Nine-slot acronym binding**: duplicate letters resolve positionally,
//!   missing letters become placeholders
//! - **Graceful degradation**: unknown framework ids fall back to a
//!   generic schema; error-message input yields an empty, valid structure
//!
//! # Example Usage
//!
//! ```
//! use northstar_analysis::AnalysisParser;
//!
//! let parser = AnalysisParser::new();
//! let analysis = parser.parse(
//!     "swot",
//!     "**Strengths:** Loyal customers\n**Weaknesses:** Thin margins",
//! );
//!
//! assert_eq!(analysis.sections[0].label, "Strengths");
//! assert_eq!(analysis.sections[0].items[0].text, "Loyal customers");
//! assert_eq!(analysis.acronym.len(), 9);
//! ```

#![warn(missing_docs)]

mod acronym;
mod config;
mod error;
mod frameworks;
mod parser;
mod preprocess;
mod sections;
mod segment;
mod trailer;


pub use config::ParserConfig;
pub use error::AnalysisError;
pub use frameworks::{FrameworkSpec, SectionShape};
pub use parser::{AnalysisParser, ParseReport};

// Domain types callers consume alongside the parser
pub use northstar_domain::{
    AcronymItem, AnalysisSection, ContentItem, FrameworkId, StructuredAnalysis,
};
