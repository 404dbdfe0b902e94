//! Shared types, traits, and errors for the Courier middleware.
//!
//! This crate is the foundation that the classifier and gateway crates
//! depend on. It contains:
//! - **Trait contracts** (`traits`) that define the subsystem seams
//! - **Shared data types** (`messages`) used across the whole pipeline
//! - **Error types** (`errors`) for unified error handling
//! - **Config types** (`config`, `config_loader`) for the gateway's YAML
//!   configuration with validation and hot-reload

pub mod config;
pub mod config_loader;
pub mod errors;
pub mod messages;
pub mod traits;

// Re-export commonly used types at the crate root for convenience.
pub use errors::CourierError;
pub use messages::*;
pub use traits::*;
