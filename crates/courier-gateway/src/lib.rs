//! Gateway boundary for the Courier middleware.
//!
//! Connects the classifier to the outside world:
//! - **Router**: per-message orchestration of classify, execute, notify, reply
//! - **Executor**: HTTP client for the workflow engine's webhook contract
//! - **Notify**: realtime update fan-out over a broadcast channel
pub mod executor;
pub mod notify;
pub mod router;

pub use executor::WebhookExecutor;
pub use notify::BroadcastNotifier;
pub use router::{ChatRouter, ChatRouterDeps};
