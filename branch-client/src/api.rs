//! Branch API endpoints

use crate::{ClientResult, NetworkHttpClient};
use async_trait::async_trait;
use shared::models::{Branch, BranchUpdate};
use shared::response::DataResponse;

/// Embeds each branch's sections and each section's tables
pub const BRANCH_INCLUDES: [(&str, &str); 2] = [
    ("include[0]", "sections"),
    ("include[1]", "sections.tables"),
];

/// Remote operations the branch store depends on
#[async_trait]
pub trait BranchApi: Send + Sync {
    /// `GET branches` with sections and tables embedded
    async fn list_branches(&self) -> ClientResult<Vec<Branch>>;

    /// `PUT branches/{id}` with the set fields of `update`; `id` is sent as one
    /// percent-encoded path segment
    async fn update_branch(&self, id: &str, update: &BranchUpdate) -> ClientResult<()>;
}

#[async_trait]
impl BranchApi for NetworkHttpClient {
    async fn list_branches(&self) -> ClientResult<Vec<Branch>> {
        let resp: DataResponse<Vec<Branch>> =
            self.get_with_query(&["branches"], &BRANCH_INCLUDES).await?;
        Ok(resp.into_data())
    }

    async fn update_branch(&self, id: &str, update: &BranchUpdate) -> ClientResult<()> {
        self.put(&["branches", id], update).await
    }
}
