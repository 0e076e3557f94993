//! Authorization-gated project operations.
//!
//! Every entry point that touches an existing project follows the same
//! sequence: fetch the project (stop with `NotFound` if absent, without
//! consulting the gate), ask the gate about the fetched project and the
//! requested operation (stop with `Forbidden` on denial), then forward.
//! Verdicts are recomputed on every call.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::models::{
    AccessToken, Caller, FilteredResults, Operation, Project, ProjectsFilter,
};
use crate::domain::ports::{AuthorizationGate, ProjectAssignments, ProjectsClient};
use crate::services::branch_cache::BranchCache;

/// Project operations behind the authorization gate.
pub struct ProjectGateway<P, G, A>
where
    P: ProjectsClient,
    G: AuthorizationGate,
    A: ProjectAssignments,
{
    projects: Arc<P>,
    gate: Arc<G>,
    assignments: Arc<A>,
    branch_cache: Arc<BranchCache>,
}

impl<P, G, A> ProjectGateway<P, G, A>
where
    P: ProjectsClient,
    G: AuthorizationGate,
    A: ProjectAssignments,
{
    pub fn new(
        projects: Arc<P>,
        gate: Arc<G>,
        assignments: Arc<A>,
        branch_cache: Arc<BranchCache>,
    ) -> Self {
        Self {
            projects,
            gate,
            assignments,
            branch_cache,
        }
    }

    /// List one page of the projects visible to the caller.
    ///
    /// The gate is not consulted; the downstream store scopes the listing by
    /// the caller's normalized id.
    #[instrument(skip(self, caller), fields(caller = caller.id()))]
    pub async fn list_projects(
        &self,
        caller: &Caller,
        filter: &ProjectsFilter,
    ) -> GatewayResult<FilteredResults<Project>> {
        self.projects.list(filter, caller.id()).await
    }

    #[instrument(skip(self, caller), fields(caller = caller.id()))]
    pub async fn get_project(&self, caller: &Caller, project_id: &str) -> GatewayResult<Project> {
        self.authorized(caller, project_id, Operation::Read).await
    }

    /// Create a project and assign the caller to it.
    ///
    /// Creation is a capability of the caller, checked before anything is
    /// forwarded.
    #[instrument(skip(self, caller, project), fields(caller = caller.id(), project_id = %project.id))]
    pub async fn create_project(&self, caller: &Caller, project: &Project) -> GatewayResult<()> {
        if !self.gate.authorize_create(caller).await {
            warn!("project creation denied");
            return Err(forbidden(caller, &project.id, Operation::Create));
        }

        let response = self.projects.create(project).await?;
        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "downstream rejected project creation");
            return Err(GatewayError::CreateProject(response.body));
        }

        self.assignments.assign(caller.id(), &project.id).await?;
        info!("project created and assigned to caller");
        Ok(())
    }

    #[instrument(skip(self, caller, project), fields(caller = caller.id()))]
    pub async fn update_project(
        &self,
        caller: &Caller,
        project_id: &str,
        project: &Project,
    ) -> GatewayResult<()> {
        self.authorized(caller, project_id, Operation::Update).await?;

        let response = self.projects.update(project_id, project).await?;
        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "downstream rejected project update");
            return Err(GatewayError::UpdateProject(response.body));
        }

        info!("project updated");
        Ok(())
    }

    /// Fetch the upload token of a project. Requires update rights.
    #[instrument(skip(self, caller), fields(caller = caller.id()))]
    pub async fn get_access_token(
        &self,
        caller: &Caller,
        project_id: &str,
    ) -> GatewayResult<AccessToken> {
        self.authorized(caller, project_id, Operation::Update).await?;

        self.projects
            .access_token(project_id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("access token of project '{project_id}'")))
    }

    /// Delete a project; the downstream store cascades to branches and documents.
    #[instrument(skip(self, caller), fields(caller = caller.id()))]
    pub async fn delete_project(&self, caller: &Caller, project_id: &str) -> GatewayResult<()> {
        self.authorized(caller, project_id, Operation::Delete).await?;

        // TODO: remove the project's documents from the search index once a
        // search service client is wired into the gateway.
        let response = self.projects.delete(project_id).await?;
        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "downstream rejected project deletion");
            return Err(GatewayError::DeleteProject(response.body));
        }

        self.branch_cache.invalidate(project_id).await;
        info!("project deleted");
        Ok(())
    }

    async fn authorized(
        &self,
        caller: &Caller,
        project_id: &str,
        operation: Operation,
    ) -> GatewayResult<Project> {
        let project = self
            .projects
            .get(project_id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(format!("project '{project_id}'")))?;

        if !self.gate.authorize(caller, &project, operation).await {
            warn!(%operation, "project operation denied");
            return Err(forbidden(caller, project_id, operation));
        }

        Ok(project)
    }
}

fn forbidden(caller: &Caller, project_id: &str, operation: Operation) -> GatewayError {
    GatewayError::Forbidden {
        caller: caller.id().to_string(),
        project_id: project_id.to_string(),
        operation,
    }
}
