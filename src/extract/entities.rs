//! Entity recognition: email addresses, department references, fallbacks.

use regex::Regex;

use crate::extract::types::{Entity, EntityRole};

/// Email-address pattern used to spot people. The `|` inside the final
/// class is a literal character, not alternation.
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b";

/// Tokens containing any of these name an organization together with the
/// token immediately before them.
const DEPARTMENT_KEYWORDS: [&str; 6] = ["department", "team", "division", "unit", "office", "branch"];

/// Recognizes people and organizations in an email body.
///
/// Holds the compiled address pattern; construct once and share.
pub struct EntityRecognizer {
    email_re: Regex,
}

impl EntityRecognizer {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    /// Extract entities from an email body.
    ///
    /// 1. Up to the first 3 email addresses become Person entities named
    ///    after their local part. The first entity found is the
    ///    `Complainant`; everything after it is a `Witness`.
    /// 2. The first whitespace token containing a department keyword names
    ///    an Organization together with the preceding token. A keyword in
    ///    the very first token has no preceding token and is dropped; the
    ///    scan stops either way.
    /// 3. If nothing was found, two placeholder people are synthesized so
    ///    the result is never empty.
    pub fn recognize(&self, email_body: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        for m in self.email_re.find_iter(email_body).take(3) {
            let local_part = m.as_str().split('@').next().unwrap_or_default();
            let name = title_case(&local_part.replace('.', " "));
            let role = if entities.is_empty() {
                EntityRole::Complainant
            } else {
                EntityRole::Witness
            };
            entities.push(Entity::person(name, role));
        }

        let tokens: Vec<&str> = email_body.split_whitespace().collect();
        for (idx, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            if DEPARTMENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                if idx > 0 {
                    let name = title_case(&format!("{} {}", tokens[idx - 1], token));
                    entities.push(Entity::organization(name));
                }
                break;
            }
        }

        if entities.is_empty() {
            entities.push(Entity::person("Anonymous Reporter", EntityRole::Complainant));
            entities.push(Entity::person("Unknown Subject", EntityRole::Subject));
        }

        entities
    }
}

impl Default for EntityRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
