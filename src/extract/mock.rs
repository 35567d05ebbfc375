//! Keyword-heuristic extraction backend.
//!
//! Stands in for the real LLM call: the narrative, allegation and entity
//! heuristics run as in-memory string scans, so extraction is deterministic
//! and never blocks.

use async_trait::async_trait;
use tracing::debug;

use crate::error::ExtractionError;
use crate::extract::entities::EntityRecognizer;
use crate::extract::types::CaseExtraction;
use crate::extract::{CaseExtractor, allegations, narrative};

/// Mock extraction engine backed by keyword and regex heuristics.
pub struct MockExtractor {
    entities: EntityRecognizer,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self {
            entities: EntityRecognizer::new(),
        }
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaseExtractor for MockExtractor {
    fn backend_name(&self) -> &str {
        "mock"
    }

    async fn extract(&self, email_body: &str) -> Result<CaseExtraction, ExtractionError> {
        debug!("Synthesizing narrative");
        let narrative_text = narrative::synthesize(email_body);

        debug!("Classifying allegations");
        let allegations = allegations::classify(email_body);

        debug!("Recognizing entities");
        let entities = self.entities.recognize(email_body);

        Ok(CaseExtraction {
            narrative_text,
            allegations,
            entities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::types::{AllegationKind, EntityCategory};

    #[tokio::test]
    async fn results_are_never_empty() {
        let extractor = MockExtractor::new();
        let extraction = extractor.extract("An unremarkable note.").await.unwrap();

        assert!(!extraction.allegations.is_empty());
        assert!(!extraction.entities.is_empty());
    }

    #[tokio::test]
    async fn extraction_is_deterministic() {
        let extractor = MockExtractor::new();
        let body = "A complaint about harassment in the Marketing department \
                    from john.doe@example.com";

        let first = extractor.extract(body).await.unwrap();
        let second = extractor.extract(body).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn combines_all_three_heuristics() {
        let extractor = MockExtractor::new();
        let extraction = extractor
            .extract("There was a complaint about harassment in the Marketing department")
            .await
            .unwrap();

        assert!(extraction.narrative_text.contains("harassment allegations"));
        assert!(extraction.narrative_text.contains("formal complaint"));
        assert!(
            extraction
                .allegations
                .iter()
                .any(|a| a.kind == AllegationKind::Harassment)
        );
        assert!(extraction.entities.iter().any(|e| {
            e.category == EntityCategory::Organization && e.name == "Marketing Department"
        }));
    }
}
