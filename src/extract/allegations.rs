//! Keyword-group allegation classification.

use crate::extract::types::{Allegation, AllegationKind};

/// Keyword groups checked in order. Any substring hit within a group emits
/// one allegation; groups are independent, so several can fire on one email.
const GROUPS: [(&[&str], AllegationKind, &str); 4] = [
    (
        &["harassment", "harass", "inappropriate comments"],
        AllegationKind::Harassment,
        "Allegations of workplace harassment and inappropriate behavior",
    ),
    (
        &["discrimination", "discriminate", "bias"],
        AllegationKind::ConflictOfInterest,
        "Allegations of discriminatory treatment or bias",
    ),
    (
        &["misconduct", "violation", "policy breach"],
        AllegationKind::Misconduct,
        "Allegations of policy violations and professional misconduct",
    ),
    (
        &["fraud", "financial", "money", "theft"],
        AllegationKind::Other,
        "Allegations involving financial irregularities or fraud",
    ),
];

const FALLBACK_DESCRIPTION: &str = "General workplace incident requiring investigation";

/// Classify an email body into one or more allegations.
///
/// Matching is plain case-insensitive substring containment — no
/// tokenization, no negation handling ("no harassment occurred" still
/// counts). The result is never empty: a generic `Other` allegation is
/// synthesized when no group matches.
pub fn classify(email_body: &str) -> Vec<Allegation> {
    let lower = email_body.to_lowercase();

    let mut allegations: Vec<Allegation> = GROUPS
        .iter()
        .filter(|(keywords, _, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, kind, description)| Allegation {
            kind: *kind,
            description: (*description).to_string(),
        })
        .collect();

    if allegations.is_empty() {
        allegations.push(Allegation {
            kind: AllegationKind::Other,
            description: FALLBACK_DESCRIPTION.to_string(),
        });
    }

    allegations
}
