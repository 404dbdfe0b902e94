//! Workflow category scoring.
//!
//! For every category in the catalog, combines keyword-set evidence from the
//! extracted lemmas with regex-pattern evidence from the raw text, weighted
//! 0.6 / 0.4, then scales by the category's static priority weight. Pure
//! function of its inputs and the immutable catalog.

use courier_types::messages::WorkflowCategory;

use crate::catalog::WorkflowCatalog;

/// Weight of the keyword-fraction component.
pub const KEYWORD_WEIGHT: f64 = 0.6;

/// Total weight distributed across a category's patterns; each matching
/// pattern contributes `PATTERN_WEIGHT / pattern_count`.
pub const PATTERN_WEIGHT: f64 = 0.4;

/// Per-category scores in catalog order.
///
/// The order is part of the contract: the selector breaks ties by first
/// occurrence, so equal scores resolve to the earlier catalog entry.
pub type CategoryScores = Vec<(WorkflowCategory, f64)>;

/// Score every category against one message.
///
/// `keywords` are the extracted lemmas (empty when extraction degraded, which
/// zeroes the keyword component for all categories); `raw` is the original
/// text for pattern matching.
pub fn score_all(catalog: &WorkflowCatalog, raw: &str, keywords: &[String]) -> CategoryScores {
    catalog
        .profiles()
        .iter()
        .map(|profile| {
            let matched = keywords
                .iter()
                .filter(|k| profile.has_keyword(k))
                .count() as f64;
            let keyword_score = matched / keywords.len().max(1) as f64;

            let pattern_hits = profile.patterns().iter().filter(|p| p.is_match(raw)).count();
            let pattern_score =
                pattern_hits as f64 * (PATTERN_WEIGHT / profile.patterns().len() as f64);

            let raw_score = keyword_score * KEYWORD_WEIGHT + pattern_score;
            (profile.category(), raw_score * profile.priority())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(scores: &CategoryScores, category: WorkflowCategory) -> f64 {
        scores
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
            .unwrap()
    }

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_scores_cover_catalog_in_order() {
        let catalog = WorkflowCatalog::new();
        let scores = score_all(&catalog, "", &[]);
        let order: Vec<WorkflowCategory> = scores.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, WorkflowCategory::ALL.to_vec());
    }

    #[test]
    fn test_empty_input_scores_zero() {
        let catalog = WorkflowCatalog::new();
        for (_, score) in score_all(&catalog, "", &[]) {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_keyword_component() {
        let catalog = WorkflowCatalog::new();
        // 2 of 4 keywords hit calendar-intelligence, no pattern matches on
        // this raw text: 0.5 * 0.6 * 0.9 priority.
        let scores = score_all(
            &catalog,
            "calendar event foo bar",
            &keywords(&["calendar", "event", "foo", "bar"]),
        );
        let calendar = score_of(&scores, WorkflowCategory::CalendarIntelligence);
        assert!((calendar - 0.5 * KEYWORD_WEIGHT * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_pattern_component() {
        let catalog = WorkflowCatalog::new();
        // No keywords; two of calendar-intelligence's four patterns match
        // ("are we free", "at 3pm"): 2 * (0.4 / 4) * 0.9 priority.
        let scores = score_all(&catalog, "are we free at 3pm", &[]);
        let calendar = score_of(&scores, WorkflowCategory::CalendarIntelligence);
        assert!(calendar > 0.0);
        assert!((calendar - 2.0 * (PATTERN_WEIGHT / 4.0) * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_scheduling_scenario_scores() {
        let catalog = WorkflowCatalog::new();
        let raw = "Schedule a meeting with John tomorrow at 2pm";
        let kws = keywords(&["schedule", "meet", "john", "tomorrow", "2pm"]);
        let scores = score_all(&catalog, raw, &kws);

        let calendar = score_of(&scores, WorkflowCategory::CalendarIntelligence);
        let tasks = score_of(&scores, WorkflowCategory::TaskManagement);

        // 3/5 keywords and 2/4 patterns: (0.6*0.6 + 2*0.1) * 0.9
        assert!((calendar - (0.6 * KEYWORD_WEIGHT + 0.2) * 0.9).abs() < 1e-9);
        assert!(calendar > tasks);
    }

    #[test]
    fn test_empty_keywords_only_zeroes_keyword_evidence() {
        let catalog = WorkflowCatalog::new();
        let raw = "schedule a meeting at 2pm";
        let with = score_all(&catalog, raw, &keywords(&["schedule", "meet"]));
        let without = score_all(&catalog, raw, &[]);
        let cal_with = score_of(&with, WorkflowCategory::CalendarIntelligence);
        let cal_without = score_of(&without, WorkflowCategory::CalendarIntelligence);
        assert!(cal_without > 0.0, "pattern evidence must survive");
        assert!(cal_with > cal_without);
    }

    #[test]
    fn test_determinism() {
        let catalog = WorkflowCatalog::new();
        let raw = "add a task for friday";
        let kws = keywords(&["task", "friday"]);
        assert_eq!(score_all(&catalog, raw, &kws), score_all(&catalog, raw, &kws));
    }
}
