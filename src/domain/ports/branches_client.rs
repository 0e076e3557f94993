use async_trait::async_trait;

use crate::domain::errors::GatewayResult;
use crate::domain::models::{Branch, DownstreamResponse};

/// Client for the branch endpoints of the downstream repository service.
///
/// Mutations report the downstream status instead of failing, so callers
/// decide which typed error a non-success maps to. `Err` is reserved for
/// transport failures (connection errors, timeouts, malformed payloads).
#[async_trait]
pub trait BranchesClient: Send + Sync {
    /// List every branch of a project, in downstream order
    async fn list(&self, project_id: &str) -> GatewayResult<Vec<Branch>>;

    /// Get a single branch
    ///
    /// # Returns
    /// * `Ok(Some(branch))` if found
    /// * `Ok(None)` if the project has no such branch
    async fn get(&self, project_id: &str, branch_name: &str) -> GatewayResult<Option<Branch>>;

    async fn create(&self, project_id: &str, branch: &Branch) -> GatewayResult<DownstreamResponse>;

    async fn update(
        &self,
        project_id: &str,
        branch_name: &str,
        branch: &Branch,
    ) -> GatewayResult<DownstreamResponse>;

    async fn delete(&self, project_id: &str, branch_name: &str) -> GatewayResult<DownstreamResponse>;
}
