//! Shared data types used across all Courier subsystems.
//!
//! These types are the lingua franca of the system: the classifier, the
//! gateway, and the engine webhook contract all agree on these structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================
// Workflow Categories
// ============================================================

/// A destination workflow for a classified message.
///
/// This is a closed set: adding a category means adding a variant here and a
/// profile in the classifier catalog, and the compiler enforces that every
/// match over categories stays exhaustive. Exactly one variant
/// ([`WorkflowCategory::GeneralFallback`]) is the fallback used when no
/// category clears the minimum-confidence floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowCategory {
    /// Voice note transcription and audio handling.
    VoiceProcessing,
    /// News digests and current-events queries.
    NewsIntelligence,
    /// Scheduling, meetings, and calendar lookups.
    CalendarIntelligence,
    /// Task and to-do CRUD plus deadline tracking.
    TaskManagement,
    /// Free-form discussion about a project.
    ProjectChatbot,
    /// The daily morning briefing.
    MorningBrief,
    /// Notification preferences (mute, snooze, subscribe).
    NotificationManagement,
    /// Productivity analytics and reviews.
    AnalyticsLearning,
    /// Habit and routine coaching.
    RoutineCoaching,
    /// Project health, milestones, and risk.
    ProjectIntelligence,
    /// Calendar conflict resolution and focus-time placement.
    CalendarOptimization,
    /// Generic conversational handler when nothing else matches.
    GeneralFallback,
}

impl WorkflowCategory {
    /// All categories in catalog order.
    ///
    /// This order is load-bearing: the scorer emits scores in this order and
    /// the selector breaks ties by first occurrence in it.
    pub const ALL: [WorkflowCategory; 12] = [
        WorkflowCategory::VoiceProcessing,
        WorkflowCategory::NewsIntelligence,
        WorkflowCategory::CalendarIntelligence,
        WorkflowCategory::TaskManagement,
        WorkflowCategory::ProjectChatbot,
        WorkflowCategory::MorningBrief,
        WorkflowCategory::NotificationManagement,
        WorkflowCategory::AnalyticsLearning,
        WorkflowCategory::RoutineCoaching,
        WorkflowCategory::ProjectIntelligence,
        WorkflowCategory::CalendarOptimization,
        WorkflowCategory::GeneralFallback,
    ];

    /// The kebab-case identifier used on the wire and in context hints.
    pub fn id(&self) -> &'static str {
        match self {
            WorkflowCategory::VoiceProcessing => "voice-processing",
            WorkflowCategory::NewsIntelligence => "news-intelligence",
            WorkflowCategory::CalendarIntelligence => "calendar-intelligence",
            WorkflowCategory::TaskManagement => "task-management",
            WorkflowCategory::ProjectChatbot => "project-chatbot",
            WorkflowCategory::MorningBrief => "morning-brief",
            WorkflowCategory::NotificationManagement => "notification-management",
            WorkflowCategory::AnalyticsLearning => "analytics-learning",
            WorkflowCategory::RoutineCoaching => "routine-coaching",
            WorkflowCategory::ProjectIntelligence => "project-intelligence",
            WorkflowCategory::CalendarOptimization => "calendar-optimization",
            WorkflowCategory::GeneralFallback => "general-fallback",
        }
    }

    /// Parse a category identifier.
    ///
    /// Returns `None` for unknown ids; callers treat context hints as a
    /// permissive bag, so unknown ids are skipped, not rejected.
    pub fn from_id(id: &str) -> Option<WorkflowCategory> {
        WorkflowCategory::ALL.iter().copied().find(|c| c.id() == id)
    }
}

impl std::fmt::Display for WorkflowCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================
// Classification Types
// ============================================================

/// Caller-supplied conversational context for one classification call.
///
/// This is a permissive bag of optional hints: unknown keys are ignored on
/// deserialization and unknown category ids in `recent_workflows` are
/// skipped. Nothing here is retained across calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisContext {
    /// Category ids recently routed to in this conversation, most recent
    /// last. Each distinct known id boosts that category's score.
    #[serde(default)]
    pub recent_workflows: Vec<String>,
    /// Coarse time-of-day hint; only "morning" and "evening" have effect.
    #[serde(default)]
    pub time_of_day: Option<String>,
}

/// The kind of entity found in raw message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A date literal (weekday, today/tomorrow/yesterday, numeric date).
    Date,
    /// A time literal (H:MM, optional am/pm, or bare H am/pm).
    Time,
}

/// A typed span extracted from the raw (non-normalized) message text.
///
/// Offsets are byte positions into the original input, so
/// `raw[start..end] == value` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedEntity {
    /// What kind of literal this is.
    pub kind: EntityKind,
    /// The matched substring, verbatim.
    pub value: String,
    /// Byte offset of the match start in the raw text.
    pub start: usize,
    /// Byte offset one past the match end in the raw text.
    pub end: usize,
}

/// The communicative intent detected in a message, at most one per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// The user is asking something.
    Question,
    /// The user is asking the assistant to do something, politely phrased.
    Request,
    /// An imperative instruction.
    Command,
    /// The user wants information about a topic.
    Information,
    /// The user needs help using the assistant itself.
    Help,
}

/// The classifier's routing decision for one message.
///
/// Created fresh per call and immutable once returned. A low-confidence
/// general-fallback result is a valid, actionable outcome (route to the
/// generic conversational handler), not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// The category the message should be routed to.
    pub recommended_workflow: WorkflowCategory,
    /// Final score clamped into [0, 1].
    pub confidence: f64,
    /// Short human-readable rationale for the decision.
    pub reasoning: String,
    /// Deduplicated keyword lemmas in first-occurrence order, at most 20.
    pub keywords: Vec<String>,
    /// Detected intent, if any pattern group matched.
    pub intent: Option<Intent>,
    /// Date/time literals found in the raw text.
    pub entities: Vec<ExtractedEntity>,
}

// ============================================================
// Gateway Boundary Types
// ============================================================

/// An inbound chat message from the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id.
    pub id: Uuid,
    /// Owning user.
    pub user_id: String,
    /// Conversation this message belongs to.
    pub conversation_id: String,
    /// The raw message text.
    pub content: String,
    /// Optional conversational context supplied by the frontend.
    #[serde(default)]
    pub context: Option<AnalysisContext>,
    /// When the frontend sent the message.
    pub timestamp: DateTime<Utc>,
}

/// A request handed to the workflow execution engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRequest {
    /// Destination workflow, serialized as its kebab-case id.
    pub workflow_type: WorkflowCategory,
    /// Owning user.
    pub user_id: String,
    /// Conversation the triggering message belongs to.
    pub conversation_id: String,
    /// Engine payload: the original message plus the full analysis.
    pub input_data: serde_json::Value,
}

/// The engine's response to a workflow execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResponse {
    /// Text to show the user.
    pub response: String,
    /// The workflow that produced the response.
    pub workflow_type: WorkflowCategory,
    /// Engine-side execution id, when the engine assigns one.
    #[serde(default)]
    pub execution_id: Option<String>,
    /// Engine-reported processing time in seconds.
    #[serde(default)]
    pub processing_time: f64,
    /// Free-form engine metadata.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// The gateway's reply to the frontend for one chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Text to show the user.
    pub response: String,
    /// The workflow the message was routed to.
    pub workflow_type: WorkflowCategory,
    /// Engine-side execution id, if any.
    pub execution_id: Option<String>,
    /// Engine-reported processing time in seconds.
    pub processing_time: f64,
    /// The classification that drove the routing decision.
    pub analysis: ContentAnalysis,
}

/// A realtime update fanned out to connected frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeUpdate {
    /// User the update is for.
    pub user_id: String,
    /// Update topic (e.g. "chat.reply", "workflow.completed").
    pub topic: String,
    /// Topic-specific payload.
    pub payload: serde_json::Value,
    /// When the update was produced.
    pub timestamp: DateTime<Utc>,
}
