use async_trait::async_trait;

use crate::domain::errors::GatewayResult;
use crate::domain::models::{
    AccessToken, DownstreamResponse, FilteredResults, Project, ProjectsFilter,
};

/// Client for the project endpoints of the downstream repository service.
#[async_trait]
pub trait ProjectsClient: Send + Sync {
    /// List one page of the projects visible to `caller_id`
    async fn list(
        &self,
        filter: &ProjectsFilter,
        caller_id: &str,
    ) -> GatewayResult<FilteredResults<Project>>;

    /// Get a project by ID, `Ok(None)` if it does not exist
    async fn get(&self, project_id: &str) -> GatewayResult<Option<Project>>;

    async fn create(&self, project: &Project) -> GatewayResult<DownstreamResponse>;

    async fn update(&self, project_id: &str, project: &Project) -> GatewayResult<DownstreamResponse>;

    /// Delete a project; the downstream store cascades to its branches and documents
    async fn delete(&self, project_id: &str) -> GatewayResult<DownstreamResponse>;

    async fn access_token(&self, project_id: &str) -> GatewayResult<Option<AccessToken>>;
}
