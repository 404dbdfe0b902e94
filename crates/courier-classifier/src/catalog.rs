//! The static workflow category table.
//!
//! One profile per [`WorkflowCategory`]: a keyword set (base forms, matched
//! against keyword lemmas), an ordered list of regex patterns (matched
//! against raw text, case-insensitive), and a priority weight in (0, 1].
//! Built once at classifier construction and immutable for the process
//! lifetime.
//!
//! Declaration order here is load-bearing: scores are emitted in this order
//! and equal-score ties resolve to the earlier entry.

use std::collections::HashSet;

use regex::Regex;

use courier_types::messages::WorkflowCategory;

/// Static per-category configuration.
pub struct CategoryProfile {
    category: WorkflowCategory,
    keywords: HashSet<&'static str>,
    patterns: Vec<Regex>,
    priority: f64,
}

impl CategoryProfile {
    fn new(
        category: WorkflowCategory,
        keywords: &[&'static str],
        patterns: &[&str],
        priority: f64,
    ) -> Self {
        Self {
            category,
            keywords: keywords.iter().copied().collect(),
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).unwrap())
                .collect(),
            priority,
        }
    }

    pub fn category(&self) -> WorkflowCategory {
        self.category
    }

    /// Whether a keyword lemma belongs to this category's keyword set.
    pub fn has_keyword(&self, lemma: &str) -> bool {
        self.keywords.contains(lemma)
    }

    /// The category's raw-text patterns, in declaration order.
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Static priority weight in (0, 1].
    pub fn priority(&self) -> f64 {
        self.priority
    }
}

/// The full category table, keyed 1:1 by [`WorkflowCategory`].
pub struct WorkflowCatalog {
    profiles: Vec<CategoryProfile>,
}

impl WorkflowCatalog {
    /// Build the catalog. Profiles appear in [`WorkflowCategory::ALL`] order.
    pub fn new() -> Self {
        let profiles = vec![
            CategoryProfile::new(
                WorkflowCategory::VoiceProcessing,
                &[
                    "voice", "audio", "transcribe", "transcription", "speech", "record",
                    "recording", "dictate", "microphone", "memo",
                ],
                &[
                    r"(?i)\b(voice|audio)\s+(message|note|memo)\b",
                    r"(?i)\btranscri(be|bed|bing|pt|ption)\b",
                    r"(?i)\bspeech\s+to\s+text\b",
                ],
                0.9,
            ),
            CategoryProfile::new(
                WorkflowCategory::NewsIntelligence,
                &[
                    "news", "headline", "article", "media", "world", "market", "politic",
                    "story", "press",
                ],
                &[
                    r"(?i)\b(latest|today'?s|current|breaking)\s+news\b",
                    r"(?i)\bwhat('s| is)\s+happening\s+(in|with|around)\b",
                    r"(?i)\bnews\s+(about|on|from)\b",
                ],
                0.8,
            ),
            CategoryProfile::new(
                WorkflowCategory::CalendarIntelligence,
                &[
                    "calendar", "schedule", "meet", "appointment", "event", "agenda",
                    "invite", "book", "reschedule", "tomorrow", "today",
                ],
                &[
                    r"(?i)\bschedule\s+(a|an|the)?\s*(meeting|call|appointment|event)\b",
                    r"(?i)\b(at|by)\s+\d{1,2}(:\d{2})?\s*(am|pm)\b",
                    r"(?i)\b(am i|are we)\s+(free|busy|available)\b",
                    r"(?i)\b(move|cancel|reschedule)\s+(my|the|our)?\s*(meeting|appointment|event|call)\b",
                ],
                0.9,
            ),
            CategoryProfile::new(
                WorkflowCategory::TaskManagement,
                &[
                    "task", "todo", "complete", "finish", "done", "deadline", "priority",
                    "checklist", "assign", "due",
                ],
                &[
                    r"(?i)\b(add|create|new)\s+(a\s+)?(task|todo)\b",
                    r"(?i)\bto-?do\s+list\b",
                    r"(?i)\bmark\s+\w+(\s+\w+)*\s+(as\s+)?(done|complete|completed)\b",
                    r"(?i)\b(due|deadline)\b",
                ],
                0.85,
            ),
            CategoryProfile::new(
                WorkflowCategory::ProjectChatbot,
                &[
                    "project", "discuss", "chat", "talk", "brainstorm", "idea", "feedback",
                    "thought",
                ],
                &[
                    r"(?i)\b(about|on|regarding)\s+(my|the|this)\s+project\b",
                    r"(?i)\b(let'?s|can we|want to)\s+(talk|chat|discuss|brainstorm)\b",
                    r"(?i)\bbrainstorm\w*\b",
                ],
                0.75,
            ),
            CategoryProfile::new(
                WorkflowCategory::MorningBrief,
                &[
                    "morning", "brief", "daily", "summary", "digest", "overview", "today",
                ],
                &[
                    r"(?i)\b(morning|daily)\s+(brief(ing)?|summary|digest|overview|update)\b",
                    r"(?i)\bstart\s+(my|the)\s+day\b",
                    r"(?i)\bwhat('s| is)\s+(on|up)\s+(for\s+)?today\b",
                ],
                0.85,
            ),
            CategoryProfile::new(
                WorkflowCategory::NotificationManagement,
                &[
                    "notification", "notify", "alert", "mute", "silence", "snooze",
                    "ping", "subscribe", "unsubscribe",
                ],
                &[
                    r"(?i)\b(turn|switch)\s+(on|off)\s+notifications?\b",
                    r"(?i)\b(mute|silence|snooze)\b",
                    r"(?i)\bstop\s+(sending|notifying|pinging)\b",
                ],
                0.7,
            ),
            CategoryProfile::new(
                WorkflowCategory::AnalyticsLearning,
                &[
                    "analytics", "insight", "trend", "statistic", "stat", "productivity",
                    "productive", "progress", "review", "reflect", "metric", "week",
                ],
                &[
                    r"(?i)\bhow\s+(productive|much|many)\b",
                    r"(?i)\b(show|view)\s+(me\s+)?(my\s+)?(stats|analytics|insights|trends|metrics)\b",
                    r"(?i)\b(weekly|monthly)\s+(review|report)\b",
                ],
                0.7,
            ),
            CategoryProfile::new(
                WorkflowCategory::RoutineCoaching,
                &[
                    "routine", "habit", "streak", "coach", "practice", "consistency",
                    "skip",
                ],
                &[
                    r"(?i)\b(my|a|new|daily)\s+(routine|habit)\b",
                    r"(?i)\b(build|break|stick\s+to|keep\s+up)\s+(a|the|my)?\s*(habit|routine|streak)\b",
                    r"(?i)\bskipped\s+(my|the)\b",
                ],
                0.75,
            ),
            CategoryProfile::new(
                WorkflowCategory::ProjectIntelligence,
                &[
                    "project", "health", "milestone", "blocker", "risk", "deliverable",
                    "timeline", "scope", "sprint",
                ],
                &[
                    r"(?i)\bproject\s+(health|status|progress|risk)\b",
                    r"(?i)\b(on|off)\s+track\b",
                    r"(?i)\b(milestone|blocker|deliverable)s?\b",
                ],
                0.7,
            ),
            CategoryProfile::new(
                WorkflowCategory::CalendarOptimization,
                &[
                    "optimize", "conflict", "overlap", "rearrange", "gap", "focus",
                    "availability", "slot",
                ],
                &[
                    r"(?i)\boptimi[sz]e\s+(my\s+)?(calendar|schedule|day|week)\b",
                    r"(?i)\b(find|block)\s+(me\s+)?(some\s+)?(time|a\s+slot|focus\s+time)\b",
                    r"(?i)\b(conflict|overlap)(s|ing)?\b",
                ],
                0.7,
            ),
            CategoryProfile::new(
                WorkflowCategory::GeneralFallback,
                &["hello", "thanks", "thank", "chat", "talk"],
                &[r"(?i)\b(hello|hey|thanks|thank\s+you|good\s+(morning|evening|night))\b"],
                0.5,
            ),
        ];

        debug_assert_eq!(profiles.len(), WorkflowCategory::ALL.len());
        Self { profiles }
    }

    /// All profiles in catalog order.
    pub fn profiles(&self) -> &[CategoryProfile] {
        &self.profiles
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category_in_order() {
        let catalog = WorkflowCatalog::new();
        let order: Vec<WorkflowCategory> =
            catalog.profiles().iter().map(|p| p.category()).collect();
        assert_eq!(order, WorkflowCategory::ALL);
    }

    #[test]
    fn test_priorities_in_unit_range() {
        for profile in WorkflowCatalog::new().profiles() {
            assert!(
                profile.priority() > 0.0 && profile.priority() <= 1.0,
                "{} priority out of range",
                profile.category()
            );
        }
    }

    #[test]
    fn test_every_profile_has_keywords_and_patterns() {
        for profile in WorkflowCatalog::new().profiles() {
            assert!(
                !profile.patterns().is_empty(),
                "{} has no patterns",
                profile.category()
            );
        }
    }

    #[test]
    fn test_keyword_lookup() {
        let catalog = WorkflowCatalog::new();
        let calendar = &catalog.profiles()[2];
        assert_eq!(calendar.category(), WorkflowCategory::CalendarIntelligence);
        assert!(calendar.has_keyword("meet"));
        assert!(calendar.has_keyword("schedule"));
        assert!(!calendar.has_keyword("weather"));
    }
}
