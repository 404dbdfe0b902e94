//! Date and time entity extraction.
//!
//! Scans the raw (non-normalized) text with a fixed set of case-insensitive
//! regexes and emits typed spans with byte offsets into the original input.
//! Results follow pattern-then-match scan order, not offset order; this
//! mirrors the extractor the routing tables were tuned against, and patterns
//! may report overlapping spans (e.g. "2:30 pm" also yields "30 pm").

use regex::Regex;

use courier_types::messages::{EntityKind, ExtractedEntity};

/// A compiled entity pattern with its kind.
struct EntityPattern {
    kind: EntityKind,
    regex: Regex,
}

/// Extracts date and time literals from raw message text.
///
/// All regexes are compiled once at construction time.
pub struct EntityExtractor {
    patterns: Vec<EntityPattern>,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            patterns: Self::compile_patterns(),
        }
    }

    /// Compile the fixed entity pattern table.
    fn compile_patterns() -> Vec<EntityPattern> {
        vec![
            // Weekday names
            EntityPattern {
                kind: EntityKind::Date,
                regex: Regex::new(
                    r"(?i)\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
                )
                .unwrap(),
            },
            // Relative day words
            EntityPattern {
                kind: EntityKind::Date,
                regex: Regex::new(r"(?i)\b(today|tomorrow|yesterday)\b").unwrap(),
            },
            // Numeric dates: 3/14/2026
            EntityPattern {
                kind: EntityKind::Date,
                regex: Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap(),
            },
            // Numeric dates: 3-14-2026
            EntityPattern {
                kind: EntityKind::Date,
                regex: Regex::new(r"\b\d{1,2}-\d{1,2}-\d{4}\b").unwrap(),
            },
            // Clock times: 2:30, 2:30pm, 14:05
            EntityPattern {
                kind: EntityKind::Time,
                regex: Regex::new(r"(?i)\b\d{1,2}:\d{2}\s*(am|pm)?\b").unwrap(),
            },
            // Bare hours with meridiem: 2pm, 11 am
            EntityPattern {
                kind: EntityKind::Time,
                regex: Regex::new(r"(?i)\b\d{1,2}\s*(am|pm)\b").unwrap(),
            },
        ]
    }

    /// Extract all entities from raw text.
    ///
    /// For every non-overlapping match of every pattern, emits one entity
    /// with the matched substring and its start/end byte offsets.
    pub fn extract(&self, raw: &str) -> Vec<ExtractedEntity> {
        let mut entities = Vec::new();
        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(raw) {
                entities.push(ExtractedEntity {
                    kind: pattern.kind,
                    value: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                });
            }
        }
        entities
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
