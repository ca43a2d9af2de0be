//! Branch Client - reservation settings for business branches
//!
//! Fetches branches (with their sections and tables) from the branch API,
//! caches the reservable ones in memory and toggles reservation acceptance.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use api::BranchApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, StoreError};
pub use http::NetworkHttpClient;
pub use store::{BranchStore, UpdateOutcome, count_reservable_tables};

// Re-export shared types for convenience
pub use shared::models::{Branch, BranchUpdate, Section, Table};
