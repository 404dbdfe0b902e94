//! Workflow engine webhook client.
//!
//! Implements [`WorkflowExecutor`] against the engine's webhook contract:
//! `POST {base_url}/webhook/{workflow_type}` with the request JSON, expecting
//! a [`WorkflowResponse`] body. Engine failures surface as execution errors,
//! never as classification errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use courier_types::config::EngineConfig;
use courier_types::errors::CourierError;
use courier_types::messages::{WorkflowRequest, WorkflowResponse};
use courier_types::traits::WorkflowExecutor;

/// Error body the engine returns on failed executions.
#[derive(Debug, Deserialize)]
struct EngineErrorResponse {
    message: Option<String>,
}

/// HTTP executor for the external workflow engine.
pub struct WebhookExecutor {
    /// HTTP client for webhook requests.
    client: Client,
    /// Base URL of the engine (overridable for testing).
    base_url: String,
}

impl WebhookExecutor {
    /// Create an executor from engine configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, CourierError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.webhook_timeout_secs))
            .build()
            .map_err(|e| CourierError::Execution(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn webhook_url(&self, request: &WorkflowRequest) -> String {
        format!("{}/webhook/{}", self.base_url, request.workflow_type)
    }
}

#[async_trait]
impl WorkflowExecutor for WebhookExecutor {
    async fn execute(&self, request: WorkflowRequest) -> Result<WorkflowResponse, CourierError> {
        let url = self.webhook_url(&request);
        debug!(%url, workflow = %request.workflow_type, "executing workflow");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CourierError::Timeout(format!("engine webhook timed out: {url}"))
                } else {
                    CourierError::Execution(format!("engine webhook request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<EngineErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| "no error detail".to_string());
            warn!(%url, %status, detail, "engine returned failure status");
            return Err(CourierError::Execution(format!(
                "engine returned {status}: {detail}"
            )));
        }

        response
            .json::<WorkflowResponse>()
            .await
            .map_err(|e| CourierError::Execution(format!("malformed engine response: {e}")))
    }
}
