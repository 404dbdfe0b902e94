//! Chat message routing.
//!
//! Orchestrates the gateway pipeline for one inbound message:
//! 1. Classify the message content
//! 2. Build the engine request from the routing decision
//! 3. Execute the workflow through the engine
//! 4. Publish a realtime update (best effort, never fails the reply)
//! 5. Assemble the reply for the frontend
//!
//! Executor failures surface to the caller as execution errors, distinct
//! from classification failures; a low-confidence fallback classification is
//! a valid routing outcome, not an error.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};

use courier_classifier::MessageClassifier;
use courier_types::config::GatewayConfig;
use courier_types::errors::CourierError;
use courier_types::messages::{ChatMessage, ChatReply, RealtimeUpdate, WorkflowRequest};
use courier_types::traits::{ContentClassifier, RealtimeNotifier, WorkflowExecutor};

use crate::executor::WebhookExecutor;
use crate::notify::BroadcastNotifier;

/// All trait-object dependencies required by the router.
///
/// Grouping these keeps every dependency explicit and injectable for
/// testing.
pub struct ChatRouterDeps {
    /// Message classifier.
    pub classifier: Arc<dyn ContentClassifier>,
    /// Workflow engine client.
    pub executor: Arc<dyn WorkflowExecutor>,
    /// Realtime update fan-out.
    pub notifier: Arc<dyn RealtimeNotifier>,
}

/// The gateway's chat-handling orchestrator.
pub struct ChatRouter {
    classifier: Arc<dyn ContentClassifier>,
    executor: Arc<dyn WorkflowExecutor>,
    notifier: Arc<dyn RealtimeNotifier>,
}

impl ChatRouter {
    /// Create a new router with all dependencies injected.
    pub fn new(deps: ChatRouterDeps) -> Self {
        Self {
            classifier: deps.classifier,
            executor: deps.executor,
            notifier: deps.notifier,
        }
    }

    /// Wire the default production stack from gateway configuration:
    /// the built-in classifier, the webhook executor, and a broadcast
    /// notifier.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, CourierError> {
        Ok(Self::new(ChatRouterDeps {
            classifier: Arc::new(MessageClassifier::new()),
            executor: Arc::new(WebhookExecutor::new(&config.engine)?),
            notifier: Arc::new(BroadcastNotifier::new(config.realtime.channel_capacity)),
        }))
    }

    /// Handle one inbound chat message end to end.
    pub async fn handle_message(&self, message: ChatMessage) -> Result<ChatReply, CourierError> {
        let analysis = self
            .classifier
            .analyze(&message.content, message.context.as_ref())
            .await?;

        debug!(
            message_id = %message.id,
            workflow = %analysis.recommended_workflow,
            confidence = analysis.confidence,
            "routing chat message"
        );

        let request = WorkflowRequest {
            workflow_type: analysis.recommended_workflow,
            user_id: message.user_id.clone(),
            conversation_id: message.conversation_id.clone(),
            input_data: serde_json::json!({
                "message": message.content,
                "analysis": analysis,
            }),
        };

        let response = self.executor.execute(request).await?;

        let update = RealtimeUpdate {
            user_id: message.user_id.clone(),
            topic: "chat.reply".to_string(),
            payload: serde_json::json!({
                "conversation_id": message.conversation_id,
                "workflow_type": response.workflow_type,
                "execution_id": response.execution_id,
            }),
            timestamp: Utc::now(),
        };
        if let Err(e) = self.notifier.publish(update).await {
            warn!(message_id = %message.id, "failed to publish realtime update: {e}");
        }

        Ok(ChatReply {
            response: response.response,
            workflow_type: response.workflow_type,
            execution_id: response.execution_id,
            processing_time: response.processing_time,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use uuid::Uuid;

    use courier_classifier::MessageClassifier;
    use courier_types::messages::{AnalysisContext, WorkflowCategory, WorkflowResponse};

    // ================================================================
    // Mock implementations
    // ================================================================

    /// Records the requests it receives and replies with a canned response.
    struct MockExecutor {
        requests: Mutex<Vec<WorkflowRequest>>,
    }

    impl MockExecutor {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(vec![]),
            })
        }

        fn last_request(&self) -> WorkflowRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl WorkflowExecutor for MockExecutor {
        async fn execute(
            &self,
            request: WorkflowRequest,
        ) -> Result<WorkflowResponse, CourierError> {
            let workflow_type = request.workflow_type;
            self.requests.lock().unwrap().push(request);
            Ok(WorkflowResponse {
                response: "done".to_string(),
                workflow_type,
                execution_id: Some("exec-42".to_string()),
                processing_time: 0.12,
                metadata: None,
            })
        }
    }

    struct MockFailingExecutor;

    #[async_trait]
    impl WorkflowExecutor for MockFailingExecutor {
        async fn execute(
            &self,
            _request: WorkflowRequest,
        ) -> Result<WorkflowResponse, CourierError> {
            Err(CourierError::Execution("engine unavailable".to_string()))
        }
    }

    /// Notifier that always fails, to prove publish failures don't fail the
    /// reply.
    struct MockFailingNotifier {
        tx: tokio::sync::broadcast::Sender<RealtimeUpdate>,
    }

    impl MockFailingNotifier {
        fn new() -> Arc<Self> {
            let (tx, _) = tokio::sync::broadcast::channel(1);
            Arc::new(Self { tx })
        }
    }

    #[async_trait]
    impl RealtimeNotifier for MockFailingNotifier {
        async fn publish(&self, _update: RealtimeUpdate) -> Result<(), CourierError> {
            Err(CourierError::Notification("channel closed".to_string()))
        }

        fn subscribe(&self) -> tokio::sync::broadcast::Receiver<RealtimeUpdate> {
            self.tx.subscribe()
        }
    }

    fn message(content: &str) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            conversation_id: "conv-1".to_string(),
            content: content.to_string(),
            context: None,
            timestamp: Utc::now(),
        }
    }

    fn router_with(
        executor: Arc<dyn WorkflowExecutor>,
        notifier: Arc<dyn RealtimeNotifier>,
    ) -> ChatRouter {
        ChatRouter::new(ChatRouterDeps {
            classifier: Arc::new(MessageClassifier::new()),
            executor,
            notifier,
        })
    }

    // ================================================================
    // Pipeline tests
    // ================================================================

    #[test]
    fn test_from_config_builds_default_stack() {
        let config = GatewayConfig {
            engine: courier_types::config::EngineConfig {
                base_url: "http://localhost:5678".to_string(),
                webhook_timeout_secs: 10,
            },
            realtime: Default::default(),
        };
        assert!(ChatRouter::from_config(&config).is_ok());
    }

    #[tokio::test]
    async fn test_routes_scheduling_message_to_calendar_workflow() {
        let executor = MockExecutor::new();
        let notifier = Arc::new(crate::notify::BroadcastNotifier::new(8));
        let router = router_with(executor.clone(), notifier);

        let reply = router
            .handle_message(message("Schedule a meeting with John tomorrow at 2pm"))
            .await
            .unwrap();

        assert_eq!(reply.workflow_type, WorkflowCategory::CalendarIntelligence);
        assert_eq!(reply.response, "done");
        assert_eq!(reply.execution_id.as_deref(), Some("exec-42"));

        let request = executor.last_request();
        assert_eq!(
            request.workflow_type,
            WorkflowCategory::CalendarIntelligence
        );
        assert_eq!(request.user_id, "user-1");
        assert_eq!(request.input_data["message"], "Schedule a meeting with John tomorrow at 2pm");
        assert!(request.input_data["analysis"]["confidence"].is_number());
    }

    #[tokio::test]
    async fn test_gibberish_routes_to_general_fallback() {
        let executor = MockExecutor::new();
        let notifier = Arc::new(crate::notify::BroadcastNotifier::new(8));
        let router = router_with(executor.clone(), notifier);

        let reply = router
            .handle_message(message("asdkjasjdk qweqwe"))
            .await
            .unwrap();

        assert_eq!(reply.workflow_type, WorkflowCategory::GeneralFallback);
        assert_eq!(reply.analysis.confidence, 0.5);
    }

    #[tokio::test]
    async fn test_executor_failure_surfaces_as_execution_error() {
        let notifier = Arc::new(crate::notify::BroadcastNotifier::new(8));
        let router = router_with(Arc::new(MockFailingExecutor), notifier);

        let err = router
            .handle_message(message("add a task for friday"))
            .await
            .unwrap_err();
        assert!(matches!(err, CourierError::Execution(_)));
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_fail_reply() {
        let executor = MockExecutor::new();
        let router = router_with(executor, MockFailingNotifier::new());

        let reply = router
            .handle_message(message("add a task for friday"))
            .await
            .unwrap();
        assert_eq!(reply.response, "done");
    }

    #[tokio::test]
    async fn test_realtime_update_published() {
        let executor = MockExecutor::new();
        let notifier = Arc::new(crate::notify::BroadcastNotifier::new(8));
        let mut rx = notifier.subscribe();
        let router = router_with(executor, notifier);

        router
            .handle_message(message("mute my notifications please"))
            .await
            .unwrap();

        let update = rx.recv().await.unwrap();
        assert_eq!(update.topic, "chat.reply");
        assert_eq!(update.user_id, "user-1");
        assert_eq!(update.payload["conversation_id"], "conv-1");
    }

    #[tokio::test]
    async fn test_context_flows_into_classification() {
        let executor = MockExecutor::new();
        let notifier = Arc::new(crate::notify::BroadcastNotifier::new(8));
        let router = router_with(executor.clone(), notifier);

        let mut msg = message("Give me my morning briefing");
        msg.context = Some(AnalysisContext {
            recent_workflows: vec![],
            time_of_day: Some("morning".to_string()),
        });
        let boosted = router.handle_message(msg).await.unwrap();
        let plain = router
            .handle_message(message("Give me my morning briefing"))
            .await
            .unwrap();

        assert_eq!(boosted.workflow_type, WorkflowCategory::MorningBrief);
        assert!(boosted.analysis.confidence > plain.analysis.confidence);
    }
}
