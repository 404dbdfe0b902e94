//! Context-sensitive score adjustment.
//!
//! Mutates category scores from auxiliary conversational signals: recently
//! routed categories get a multiplicative boost, and the time-of-day hint
//! boosts the category naturally tied to it. Absent context is the identity
//! transform.

use std::collections::HashSet;

use tracing::debug;

use courier_types::messages::{AnalysisContext, WorkflowCategory};

use crate::scorer::CategoryScores;

/// Boost for each distinct category listed in `recent_workflows`.
pub const RECENT_WORKFLOW_BOOST: f64 = 1.2;

/// Morning boost applied to the morning-brief category.
pub const MORNING_BOOST: f64 = 1.5;

/// Evening boost applied to the analytics-learning category.
pub const EVENING_BOOST: f64 = 1.3;

/// Apply context boosts to the scores in place.
///
/// Unknown category ids and unknown time-of-day values are ignored silently;
/// context is a permissive bag of hints, not a schema. A category id listed
/// more than once still boosts only once. Applicable boosts compose
/// multiplicatively.
pub fn apply_context(scores: &mut CategoryScores, context: Option<&AnalysisContext>) {
    let Some(context) = context else {
        return;
    };

    let recent: HashSet<WorkflowCategory> = context
        .recent_workflows
        .iter()
        .filter_map(|id| {
            let parsed = WorkflowCategory::from_id(id);
            if parsed.is_none() {
                debug!(%id, "ignoring unknown recent workflow id");
            }
            parsed
        })
        .collect();

    for (category, score) in scores.iter_mut() {
        if recent.contains(category) {
            *score *= RECENT_WORKFLOW_BOOST;
        }
    }

    match context.time_of_day.as_deref() {
        Some("morning") => boost(scores, WorkflowCategory::MorningBrief, MORNING_BOOST),
        Some("evening") => boost(scores, WorkflowCategory::AnalyticsLearning, EVENING_BOOST),
        Some(other) => debug!(time_of_day = other, "ignoring unknown time of day"),
        None => {}
    }
}

fn boost(scores: &mut CategoryScores, target: WorkflowCategory, factor: f64) {
    for (category, score) in scores.iter_mut() {
        if *category == target {
            *score *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_scores() -> CategoryScores {
        WorkflowCategory::ALL.iter().map(|c| (*c, 0.4)).collect()
    }

    fn score_of(scores: &CategoryScores, category: WorkflowCategory) -> f64 {
        scores
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| *s)
            .unwrap()
    }

    #[test]
    fn test_no_context_is_identity() {
        let mut scores = base_scores();
        apply_context(&mut scores, None);
        assert_eq!(scores, base_scores());
    }

    #[test]
    fn test_empty_context_is_identity() {
        let mut scores = base_scores();
        apply_context(&mut scores, Some(&AnalysisContext::default()));
        assert_eq!(scores, base_scores());
    }

    #[test]
    fn test_recent_workflow_boost_is_exactly_1_2x() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec!["task-management".to_string()],
            time_of_day: None,
        };
        apply_context(&mut scores, Some(&ctx));
        let boosted = score_of(&scores, WorkflowCategory::TaskManagement);
        assert!((boosted - 0.4 * RECENT_WORKFLOW_BOOST).abs() < 1e-9);
        // Everything else untouched.
        assert_eq!(score_of(&scores, WorkflowCategory::MorningBrief), 0.4);
    }

    #[test]
    fn test_duplicate_recent_ids_boost_once() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec![
                "task-management".to_string(),
                "task-management".to_string(),
            ],
            time_of_day: None,
        };
        apply_context(&mut scores, Some(&ctx));
        let boosted = score_of(&scores, WorkflowCategory::TaskManagement);
        assert!((boosted - 0.4 * RECENT_WORKFLOW_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_recent_ids_ignored() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec!["weather-intelligence".to_string()],
            time_of_day: None,
        };
        apply_context(&mut scores, Some(&ctx));
        assert_eq!(scores, base_scores());
    }

    #[test]
    fn test_morning_boosts_morning_brief() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec![],
            time_of_day: Some("morning".to_string()),
        };
        apply_context(&mut scores, Some(&ctx));
        let boosted = score_of(&scores, WorkflowCategory::MorningBrief);
        assert!((boosted - 0.4 * MORNING_BOOST).abs() < 1e-9);
        assert_eq!(score_of(&scores, WorkflowCategory::AnalyticsLearning), 0.4);
    }

    #[test]
    fn test_evening_boosts_analytics() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec![],
            time_of_day: Some("evening".to_string()),
        };
        apply_context(&mut scores, Some(&ctx));
        let boosted = score_of(&scores, WorkflowCategory::AnalyticsLearning);
        assert!((boosted - 0.4 * EVENING_BOOST).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_time_of_day_ignored() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec![],
            time_of_day: Some("noon".to_string()),
        };
        apply_context(&mut scores, Some(&ctx));
        assert_eq!(scores, base_scores());
    }

    #[test]
    fn test_boosts_compose_multiplicatively() {
        let mut scores = base_scores();
        let ctx = AnalysisContext {
            recent_workflows: vec!["morning-brief".to_string()],
            time_of_day: Some("morning".to_string()),
        };
        apply_context(&mut scores, Some(&ctx));
        let boosted = score_of(&scores, WorkflowCategory::MorningBrief);
        assert!((boosted - 0.4 * RECENT_WORKFLOW_BOOST * MORNING_BOOST).abs() < 1e-9);
    }
}
