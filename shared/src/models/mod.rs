//! Data models
//!
//! Shared between the branch API and its clients.
//! All IDs are opaque strings assigned by the server.

pub mod branch;

// Re-exports
pub use branch::*;
