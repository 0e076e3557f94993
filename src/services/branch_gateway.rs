//! Branch read/write orchestration in front of the downstream repository service.
//!
//! Collection reads go through [`BranchCache`]; single-branch reads always hit
//! the downstream store. Mutations are forwarded once, and the project's cache
//! entry is dropped only after the downstream store reports success, before
//! the call returns.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::models::{Branch, DownstreamResponse, EnrichedBranch};
use crate::domain::ports::BranchesClient;
use crate::services::branch_cache::BranchCache;
use crate::services::config_extractor;

/// Branch operations over a downstream client and the shared branch cache.
pub struct BranchGateway<C: BranchesClient> {
    client: Arc<C>,
    cache: Arc<BranchCache>,
}

impl<C: BranchesClient> BranchGateway<C> {
    pub fn new(client: Arc<C>, cache: Arc<BranchCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<BranchCache> {
        &self.cache
    }

    /// List a project's branches, served from the cache when possible.
    #[instrument(skip(self))]
    pub async fn list_branches(&self, project_id: &str) -> GatewayResult<Vec<EnrichedBranch>> {
        self.cache
            .get_or_load(project_id, || self.client.list(project_id))
            .await
    }

    /// Get one branch, always fresh from downstream.
    #[instrument(skip(self))]
    pub async fn get_branch(
        &self,
        project_id: &str,
        branch_name: &str,
    ) -> GatewayResult<EnrichedBranch> {
        let branch = self
            .client
            .get(project_id, branch_name)
            .await?
            .ok_or_else(|| {
                GatewayError::NotFound(format!(
                    "branch '{branch_name}' in project '{project_id}'"
                ))
            })?;

        config_extractor::enrich(branch)
    }

    #[instrument(skip(self, branch), fields(branch_name = %branch.name))]
    pub async fn create_branch(&self, project_id: &str, branch: &Branch) -> GatewayResult<()> {
        let response = self.client.create(project_id, branch).await?;
        self.finish_write(project_id, response, GatewayError::CreateBranch)
            .await
    }

    #[instrument(skip(self, branch))]
    pub async fn update_branch(
        &self,
        project_id: &str,
        branch_name: &str,
        branch: &Branch,
    ) -> GatewayResult<()> {
        let response = self.client.update(project_id, branch_name, branch).await?;
        self.finish_write(project_id, response, GatewayError::UpdateBranch)
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_branch(&self, project_id: &str, branch_name: &str) -> GatewayResult<()> {
        let response = self.client.delete(project_id, branch_name).await?;
        self.finish_write(project_id, response, GatewayError::DeleteBranch)
            .await
    }

    async fn finish_write(
        &self,
        project_id: &str,
        response: DownstreamResponse,
        failure: fn(String) -> GatewayError,
    ) -> GatewayResult<()> {
        if !response.is_success() {
            warn!(
                project_id,
                status = response.status,
                body = %response.body,
                "downstream rejected branch write"
            );
            return Err(failure(response.body));
        }

        self.cache.invalidate(project_id).await;
        info!(project_id, "branch write forwarded, cache invalidated");
        Ok(())
    }
}
