/// Unified error type for the Courier middleware.
///
/// All crates use this error type for propagation across crate boundaries.
/// Internal module errors should be converted into the appropriate variant.
#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    /// Error from the message classifier (pattern table construction,
    /// analysis failures surfaced through the classifier contract).
    #[error("classification error: {0}")]
    Classification(String),

    /// Error from the workflow execution engine (webhook transport failures,
    /// non-success responses, malformed response bodies).
    #[error("execution error: {0}")]
    Execution(String),

    /// Error from the realtime notifier (channel closed, publish failures).
    #[error("notification error: {0}")]
    Notification(String),

    /// Error from configuration loading or validation.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Timeout waiting for an external collaborator.
    #[error("timeout: {0}")]
    Timeout(String),

    /// Generic internal error for unexpected conditions.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CourierError {
    fn from(err: serde_json::Error) -> Self {
        CourierError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for CourierError {
    fn from(err: serde_yaml::Error) -> Self {
        CourierError::Serialization(err.to_string())
    }
}
