//! Northstar Domain Layer
//!
//! This crate contains the domain model for Northstar's strategic-analysis
//! engine. Its single external dependency is serde, because the structured
//! analysis output is a serialization boundary toward the rendering layer.
//! Everything else is pure value types and the trait interfaces that other
//! layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Framework**: one of the supported strategic-analysis schemas (SWOT,
//!   Porter's Five Forces, BCG Matrix, Value Chain, STRATEGIC acronym) or
//!   the Generic fallback
//! - **Structured Analysis**: the render-ready shape carved out of one raw
//!   model completion - intro, named sections, conclusion, recommendations
//! - **Acronym Slots**: the fixed nine-letter S,T,R,A,T,E,G,I,C sequence,
//!   always fully populated (placeholders where the source had no data)
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No parsing logic, only the shapes parsing produces
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod acronym;
pub mod analysis;
pub mod framework;
pub mod traits;

// Re-exports for convenience
pub use acronym::{AcronymItem, CANONICAL_SEQUENCE};
pub use analysis::{AnalysisSection, ContentItem, StructuredAnalysis};
pub use framework::FrameworkId;
