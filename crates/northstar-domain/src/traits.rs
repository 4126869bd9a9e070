//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the hosting
//! application. Implementations live outside this workspace: the survey
//! backend, the generative-model client, and the render cache are all
//! collaborators, not parts of the engine.

use crate::analysis::StructuredAnalysis;
use crate::framework::FrameworkId;

/// Trait for the upstream source of raw analysis text
///
/// Implemented by the hosting application's fetch layer. The only
/// obligation toward the engine is to eventually deliver a string for a
/// given framework - or an error-message string substituted as content,
/// which the engine accepts like any other completion.
pub trait AnalysisSource {
    /// Error type for fetch operations
    type Error;

    /// Fetch the raw completion for one entity and framework
    fn fetch(&self, entity_id: &str, framework: FrameworkId) -> Result<String, Self::Error>;
}

/// Trait for caching parsed analyses
///
/// Implemented by the hosting application. Keys are (entity id, framework);
/// the engine itself holds no state across calls, so caching is entirely
/// the caller's concern, including at-most-one-in-flight per key.
pub trait AnalysisCache {
    /// Error type for cache operations
    type Error;

    /// Look up a previously parsed analysis
    fn get(
        &self,
        entity_id: &str,
        framework: FrameworkId,
    ) -> Result<Option<StructuredAnalysis>, Self::Error>;

    /// Store a parsed analysis
    fn put(
        &mut self,
        entity_id: &str,
        framework: FrameworkId,
        analysis: StructuredAnalysis,
    ) -> Result<(), Self::Error>;
}
