//! Shared types for the branch API
//!
//! Wire models and response envelopes used by the branch client
//! and anything else that speaks the same API.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};
pub use response::DataResponse;
