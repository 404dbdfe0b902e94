//! Trait contracts for the Courier subsystems.
//!
//! The gateway codes against these interfaces, not against concrete types,
//! so the classifier, engine client, and notifier can be swapped or mocked
//! independently. All traits live here in `courier-types` so every crate can
//! depend on them without circular dependencies.

use async_trait::async_trait;

use crate::errors::CourierError;
use crate::messages::{
    AnalysisContext, ContentAnalysis, RealtimeUpdate, WorkflowRequest, WorkflowResponse,
};

/// Classifies a free-text message into a workflow routing decision.
///
/// Implementations must be stateless per call: the only shared state is the
/// immutable category table owned by the classifier instance, so concurrent
/// calls need no coordination. The algorithm itself never suspends; the
/// contract is async only so hosts can integrate it uniformly with the rest
/// of the pipeline.
#[async_trait]
pub trait ContentClassifier: Send + Sync {
    /// Analyze one message.
    ///
    /// Empty input is not an error; it yields the general-fallback decision
    /// with no keywords, intent, or entities. Keyword-extraction degradation
    /// is handled internally and never surfaces as an `Err`.
    async fn analyze(
        &self,
        content: &str,
        context: Option<&AnalysisContext>,
    ) -> Result<ContentAnalysis, CourierError>;
}

/// Hands a routing decision to the external workflow execution engine.
///
/// Failure here is an execution error reported to the caller; it is never
/// folded into the classification contract.
#[async_trait]
pub trait WorkflowExecutor: Send + Sync {
    /// Execute a workflow for a classified message and return the engine's
    /// response.
    async fn execute(&self, request: WorkflowRequest) -> Result<WorkflowResponse, CourierError>;
}

/// Fans realtime updates out to connected frontends.
#[async_trait]
pub trait RealtimeNotifier: Send + Sync {
    /// Publish an update. Publishing with no connected subscribers succeeds.
    async fn publish(&self, update: RealtimeUpdate) -> Result<(), CourierError>;

    /// Subscribe to the update stream.
    fn subscribe(&self) -> tokio::sync::broadcast::Receiver<RealtimeUpdate>;
}
