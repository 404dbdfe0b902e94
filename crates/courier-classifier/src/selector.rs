//! Final decision selection.
//!
//! Picks the highest-scoring category with ties broken by catalog order
//! (first seen wins), overrides sub-floor winners with the general fallback,
//! and clamps the reported confidence into [0, 1].

use courier_types::messages::WorkflowCategory;

use crate::scorer::CategoryScores;

/// A winning score strictly below this floor is discarded entirely in favor
/// of the general fallback.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Confidence reported for the general-fallback decision.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

/// Select the routing decision from adjusted scores.
pub fn select(scores: &CategoryScores) -> (WorkflowCategory, f64) {
    let Some(&(mut winner, mut best)) = scores.first() else {
        return (WorkflowCategory::GeneralFallback, FALLBACK_CONFIDENCE);
    };

    for &(category, score) in &scores[1..] {
        // Strictly greater: equal scores keep the earlier catalog entry.
        if score > best {
            winner = category;
            best = score;
        }
    }

    if best < MIN_CONFIDENCE {
        return (WorkflowCategory::GeneralFallback, FALLBACK_CONFIDENCE);
    }

    (winner, best.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(WorkflowCategory, f64)]) -> CategoryScores {
        pairs.to_vec()
    }

    #[test]
    fn test_empty_scores_fall_back() {
        assert_eq!(
            select(&scores(&[])),
            (WorkflowCategory::GeneralFallback, FALLBACK_CONFIDENCE)
        );
    }

    #[test]
    fn test_picks_maximum() {
        let s = scores(&[
            (WorkflowCategory::TaskManagement, 0.4),
            (WorkflowCategory::CalendarIntelligence, 0.7),
            (WorkflowCategory::MorningBrief, 0.5),
        ]);
        assert_eq!(select(&s), (WorkflowCategory::CalendarIntelligence, 0.7));
    }

    #[test]
    fn test_tie_resolves_to_first_seen() {
        let s = scores(&[
            (WorkflowCategory::TaskManagement, 0.6),
            (WorkflowCategory::CalendarIntelligence, 0.6),
        ]);
        assert_eq!(select(&s), (WorkflowCategory::TaskManagement, 0.6));
    }

    #[test]
    fn test_sub_floor_winner_is_discarded() {
        let s = scores(&[
            (WorkflowCategory::TaskManagement, 0.29),
            (WorkflowCategory::CalendarIntelligence, 0.1),
        ]);
        assert_eq!(
            select(&s),
            (WorkflowCategory::GeneralFallback, FALLBACK_CONFIDENCE)
        );
    }

    #[test]
    fn test_floor_is_strict() {
        let s = scores(&[(WorkflowCategory::TaskManagement, MIN_CONFIDENCE)]);
        assert_eq!(select(&s), (WorkflowCategory::TaskManagement, 0.3));
    }

    #[test]
    fn test_confidence_clamped_to_one() {
        let s = scores(&[(WorkflowCategory::MorningBrief, 1.7)]);
        assert_eq!(select(&s), (WorkflowCategory::MorningBrief, 1.0));
    }
}
