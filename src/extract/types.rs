//! Payload types for the extraction API.

use serde::{Deserialize, Serialize};

/// Inbound extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Correlation ID supplied by the caller; accepted as-is and echoed in
    /// error responses.
    pub call_id: i64,
    /// Plain text content of the email.
    pub email_body: String,
}

/// Category label for an allegation.
///
/// Serialized as the exact label strings the case-management side expects
/// (`"Conflict of Interest"` included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllegationKind {
    Harassment,
    #[serde(rename = "Conflict of Interest")]
    ConflictOfInterest,
    Misconduct,
    Other,
}

/// A single policy violation identified in the email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allegation {
    #[serde(rename = "type")]
    pub kind: AllegationKind,
    pub description: String,
}

/// Kind of entity referenced in the email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityCategory {
    Person,
    Organization,
}

/// Role an entity plays in the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRole {
    Complainant,
    Subject,
    Witness,
}

/// A person or organization mentioned in the email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub category: EntityCategory,
    pub name: String,
    pub role: EntityRole,
}

impl Entity {
    /// Person entity with the given role.
    pub fn person(name: impl Into<String>, role: EntityRole) -> Self {
        Self {
            category: EntityCategory::Person,
            name: name.into(),
            role,
        }
    }

    /// Organization entity; organizations are only ever witnesses.
    pub fn organization(name: impl Into<String>) -> Self {
        Self {
            category: EntityCategory::Organization,
            name: name.into(),
            role: EntityRole::Witness,
        }
    }
}

/// Full structured result for one extraction request.
///
/// Constructed fresh per request and discarded once the response is sent.
/// `allegations` and `entities` are never empty — the heuristics synthesize
/// fallbacks when nothing matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExtraction {
    pub narrative_text: String,
    pub allegations: Vec<Allegation>,
    pub entities: Vec<Entity>,
}
