//! Intent detection.
//!
//! Tests the raw text against five pattern groups in a fixed priority order:
//! question, request, command, information, help. The first group with a
//! matching pattern wins; no match at all is a normal outcome, not an error.

use regex::Regex;

use courier_types::messages::Intent;

/// An intent label with its pattern group.
struct IntentGroup {
    label: Intent,
    patterns: Vec<Regex>,
}

/// Detects at most one communicative intent per message.
pub struct IntentDetector {
    /// Groups in priority order; earlier groups shadow later ones.
    groups: Vec<IntentGroup>,
}

impl IntentDetector {
    pub fn new() -> Self {
        Self {
            groups: Self::compile_groups(),
        }
    }

    fn compile_groups() -> Vec<IntentGroup> {
        vec![
            IntentGroup {
                label: Intent::Question,
                patterns: vec![
                    Regex::new(r"(?i)^\s*(what|who|when|where|why|how|which|whose)\b").unwrap(),
                    Regex::new(r"\?\s*$").unwrap(),
                    Regex::new(r"(?i)\b(is|are|was|were|am|do|does|did)\s+(i|you|we|he|she|it|they|there)\b").unwrap(),
                ],
            },
            IntentGroup {
                label: Intent::Request,
                patterns: vec![
                    Regex::new(r"(?i)\b(can|could|would|will)\s+you\b").unwrap(),
                    Regex::new(r"(?i)\bplease\b").unwrap(),
                    Regex::new(r"(?i)\bi('d| would)?\s*(like|want|need)\s+(to|you)\b").unwrap(),
                ],
            },
            IntentGroup {
                label: Intent::Command,
                patterns: vec![
                    Regex::new(r"(?i)^\s*(show|create|add|delete|remove|update|schedule|set|start|stop|open|close|send|list|find|give|make|cancel|remind|mute|book)\b").unwrap(),
                ],
            },
            IntentGroup {
                label: Intent::Information,
                patterns: vec![
                    Regex::new(r"(?i)\btell\s+me\s+(about|more)\b").unwrap(),
                    Regex::new(r"(?i)\b(explain|describe|summarize)\b").unwrap(),
                ],
            },
            IntentGroup {
                label: Intent::Help,
                patterns: vec![
                    Regex::new(r"(?i)\bhelp\b").unwrap(),
                    Regex::new(r"(?i)\bi('m| am)\s+(lost|stuck|confused)\b").unwrap(),
                ],
            },
        ]
    }

    /// Return the label of the first pattern group that matches, or `None`.
    pub fn detect(&self, raw: &str) -> Option<Intent> {
        for group in &self.groups {
            if group.patterns.iter().any(|p| p.is_match(raw)) {
                return Some(group.label);
            }
        }
        None
    }
}

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}
