//! Human-readable reasoning for a routing decision.
//!
//! Presentation logic only: a qualitative confidence phrase, the top
//! contributing keywords, and the runner-up category when it was also
//! competitive, joined as period-separated clauses.

use courier_types::messages::WorkflowCategory;

use crate::scorer::CategoryScores;

/// Runner-up categories scoring above this are worth mentioning.
///
/// Numerically equal to the selector's floor but deliberately a separate
/// constant; the two are independently tunable.
pub const ALTERNATIVE_FLOOR: f64 = 0.3;

/// Scores above this read as a high-confidence match.
const HIGH_CONFIDENCE: f64 = 0.7;

/// Scores above this read as a good match.
const GOOD_CONFIDENCE: f64 = 0.5;

/// How many keywords to cite.
const CITED_KEYWORDS: usize = 3;

/// Build the reasoning string for a chosen category.
///
/// Always returns a non-empty string for every valid input.
pub fn explain(chosen: WorkflowCategory, scores: &CategoryScores, keywords: &[String]) -> String {
    let chosen_score = scores
        .iter()
        .find(|(c, _)| *c == chosen)
        .map(|(_, s)| *s)
        .unwrap_or(0.0);

    let mut clauses = Vec::new();

    if chosen_score > HIGH_CONFIDENCE {
        clauses.push(format!("High confidence match for {chosen}"));
    } else if chosen_score > GOOD_CONFIDENCE {
        clauses.push(format!("Good match for {chosen}"));
    } else {
        clauses.push(format!("Default selection: {chosen}"));
    }

    if !keywords.is_empty() {
        let cited: Vec<&str> = keywords
            .iter()
            .take(CITED_KEYWORDS)
            .map(String::as_str)
            .collect();
        clauses.push(format!("Key terms: {}", cited.join(", ")));
    }

    if let Some((alternative, score)) = runner_up(chosen, scores) {
        if score > ALTERNATIVE_FLOOR {
            clauses.push(format!("Also considered: {alternative}"));
        }
    }

    clauses.join(". ")
}

/// The best-scoring category other than the chosen one.
fn runner_up(chosen: WorkflowCategory, scores: &CategoryScores) -> Option<(WorkflowCategory, f64)> {
    scores
        .iter()
        .filter(|(c, _)| *c != chosen)
        .fold(None, |best, &(category, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((category, score)),
        })
}
