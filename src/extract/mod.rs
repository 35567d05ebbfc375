//! Case extraction engine.
//!
//! Three independent heuristics — narrative synthesis, allegation
//! classification, entity recognition — sit behind the [`CaseExtractor`]
//! trait so a real LLM backend can replace the mock without touching the
//! HTTP layer. The mock heuristics are pure string scans: deterministic,
//! no I/O, no cross-request state.

pub mod allegations;
pub mod entities;
pub mod mock;
pub mod narrative;
pub mod types;

pub use mock::MockExtractor;
pub use types::{
    Allegation, AllegationKind, CaseExtraction, Entity, EntityCategory, EntityRole,
    ExtractionRequest,
};

use async_trait::async_trait;

use crate::error::ExtractionError;

/// Extraction backend seam.
///
/// The mock implementation is total and never fails; an LLM-backed
/// implementation will, which is why the contract returns a `Result`.
#[async_trait]
pub trait CaseExtractor: Send + Sync {
    /// Short backend name for logs and the startup banner.
    fn backend_name(&self) -> &str;

    /// Extract structured case data from a raw email body.
    ///
    /// Callers are expected to have validated that `email_body` is
    /// non-empty after trimming.
    async fn extract(&self, email_body: &str) -> Result<CaseExtraction, ExtractionError>;
}
