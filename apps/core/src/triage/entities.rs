//! Entity candidate extraction.
//!
//! Picks capitalized words out of the original (not lowercased) text. The
//! length and capital-letter test runs on the raw token; punctuation and digits
//! are stripped afterwards and the cleaned form is not re-checked.
//!
//! Only ASCII `A-Z` counts as a capital, so proper nouns in non-Latin scripts
//! are never reported.
//!
//! Tokens are separated by the ECMAScript `\s` set, which is not the same as
//! `char::is_whitespace`: U+FEFF separates tokens, U+0085 does not. Token
//! length is measured in UTF-16 code units, so a supplementary-plane
//! character such as an emoji counts as two.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of entities returned
pub const MAX_ENTITIES: usize = 5;

/// Raw tokens must be strictly longer than this (in UTF-16 code units)
const MIN_TOKEN_UNITS: usize = 3;

// NOTE: expect() is acceptable here, the pattern is a compile-time constant
static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z]").expect("Invalid regex: non-letter pattern"));

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("Invalid regex: token separator pattern")
});

/// Extracts proper-noun-like tokens
pub struct EntityExtractor {
    max_entities: usize,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            max_entities: MAX_ENTITIES,
        }
    }

    /// Extractor returning at most `max_entities` entries, capped at [`MAX_ENTITIES`].
    pub fn with_limit(max_entities: usize) -> Self {
        Self {
            max_entities: max_entities.min(MAX_ENTITIES),
        }
    }

    /// Raw-token filter: long enough and starting with `A-Z`
    fn is_candidate(token: &str) -> bool {
        token.encode_utf16().count() > MIN_TOKEN_UNITS
            && token.chars().next().is_some_and(|c| c.is_ascii_uppercase())
    }

    fn clean(token: &str) -> String {
        NON_LETTERS.replace_all(token, "").into_owned()
    }

    /// Distinct cleaned candidates in order of first appearance.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();

        // Leading or trailing separators yield empty tokens, which never qualify
        SEPARATORS
            .split(text)
            .filter(|token| Self::is_candidate(token))
            .map(Self::clean)
            .filter(|cleaned| seen.insert(cleaned.clone()))
            .take(self.max_entities)
            .collect()
    }
}

/// Extract entities with the default limit.
pub fn extract_entities(text: &str) -> Vec<String> {
    EntityExtractor::new().extract(text)
}
