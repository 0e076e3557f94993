//! HTTP client for the downstream documentation repository service.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::errors::GatewayResult;
use crate::domain::models::{
    AccessToken, Branch, DepositoryConfig, DownstreamResponse, FilteredResults, Project,
    ProjectsFilter,
};
use crate::domain::ports::{BranchesClient, ProjectsClient};

/// Query parameter naming the caller a project listing is scoped to
const USER_ID_PARAM: &str = "userId";

/// Client for the repository service's project and branch endpoints
///
/// Every call is attempted exactly once. Timeouts and connection failures
/// surface as `GatewayError::Downstream`.
pub struct DepositoryClient {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,

    /// Service root; endpoint segments are appended to its path
    base_url: Url,

    /// Bearer token for service-to-service calls
    service_token: Option<String>,
}

impl DepositoryClient {
    /// Create a client from configuration
    ///
    /// # Returns
    /// * `Ok(DepositoryClient)` - Successfully created client
    /// * `Err(anyhow::Error)` - Invalid base URL or failed to build HTTP client
    pub fn new(config: &DepositoryConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .with_context(|| format!("Invalid depository base_url: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Depository base_url cannot carry a path: {base_url}");
        }

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            service_token: config.service_token.clone(),
        })
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Always Ok: `new` rejects cannot-be-a-base URLs.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn projects_url(&self) -> Url {
        self.endpoint(&["api", "projects"])
    }

    fn project_url(&self, project_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id])
    }

    fn access_token_url(&self, project_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "accessToken"])
    }

    fn branches_url(&self, project_id: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "branches"])
    }

    fn branch_url(&self, project_id: &str, branch_name: &str) -> Url {
        self.endpoint(&["api", "projects", project_id, "branches", branch_name])
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.service_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> GatewayResult<Response> {
        Ok(self.authorize(request).send().await?)
    }

    /// GET returning `None` on 404; any other non-success is a downstream failure.
    async fn fetch_optional<T: DeserializeOwned>(&self, url: Url) -> GatewayResult<Option<T>> {
        let response = self.send(self.http_client.get(url.clone())).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!(%url, "downstream reported not found");
            return Ok(None);
        }

        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> GatewayResult<T> {
        let response = self.send(request).await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Forward a mutation and report status and body as-is.
    async fn forward(&self, request: RequestBuilder) -> GatewayResult<DownstreamResponse> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "downstream mutation answered");
        Ok(DownstreamResponse::new(status, body))
    }
}

#[async_trait]
impl BranchesClient for DepositoryClient {
    #[instrument(skip(self))]
    async fn list(&self, project_id: &str) -> GatewayResult<Vec<Branch>> {
        self.fetch_json(self.http_client.get(self.branches_url(project_id)))
            .await
    }

    #[instrument(skip(self))]
    async fn get(&self, project_id: &str, branch_name: &str) -> GatewayResult<Option<Branch>> {
        self.fetch_optional(self.branch_url(project_id, branch_name))
            .await
    }

    #[instrument(skip(self, branch))]
    async fn create(&self, project_id: &str, branch: &Branch) -> GatewayResult<DownstreamResponse> {
        self.forward(self.http_client.post(self.branches_url(project_id)).json(branch))
            .await
    }

    #[instrument(skip(self, branch))]
    async fn update(
        &self,
        project_id: &str,
        branch_name: &str,
        branch: &Branch,
    ) -> GatewayResult<DownstreamResponse> {
        self.forward(
            self.http_client
                .put(self.branch_url(project_id, branch_name))
                .json(branch),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, project_id: &str, branch_name: &str) -> GatewayResult<DownstreamResponse> {
        self.forward(self.http_client.delete(self.branch_url(project_id, branch_name)))
            .await
    }
}

#[async_trait]
impl ProjectsClient for DepositoryClient {
    #[instrument(skip(self))]
    async fn list(
        &self,
        filter: &ProjectsFilter,
        caller_id: &str,
    ) -> GatewayResult<FilteredResults<Project>> {
        let request = self
            .http_client
            .get(self.projects_url())
            .query(filter)
            .query(&[(USER_ID_PARAM, caller_id)]);
        self.fetch_json(request).await
    }

    #[instrument(skip(self))]
    async fn get(&self, project_id: &str) -> GatewayResult<Option<Project>> {
        self.fetch_optional(self.project_url(project_id)).await
    }

    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn create(&self, project: &Project) -> GatewayResult<DownstreamResponse> {
        self.forward(self.http_client.post(self.projects_url()).json(project))
            .await
    }

    #[instrument(skip(self, project))]
    async fn update(&self, project_id: &str, project: &Project) -> GatewayResult<DownstreamResponse> {
        self.forward(self.http_client.put(self.project_url(project_id)).json(project))
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, project_id: &str) -> GatewayResult<DownstreamResponse> {
        self.forward(self.http_client.delete(self.project_url(project_id)))
            .await
    }

    #[instrument(skip(self))]
    async fn access_token(&self, project_id: &str) -> GatewayResult<Option<AccessToken>> {
        self.fetch_optional(self.access_token_url(project_id))
            .await
    }
}
