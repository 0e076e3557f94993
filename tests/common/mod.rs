//! Common test utilities for integration tests
//!
//! In-memory implementations of the gateway ports that record how they were
//! called, so tests can assert on downstream traffic and gate consultations.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bibliotheca_gateway::{
    AccessToken, AuthorizationGate, Branch, BranchCache, BranchGateway, BranchesClient,
    CacheConfig, Caller, DownstreamResponse, FilteredResults, GatewayResult, Operation, Project,
    ProjectAssignments, ProjectGateway, ProjectsClient, ProjectsFilter,
};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Branch fixture with an inline site configuration
pub fn branch(project_id: &str, name: &str, mkdocs_yaml: &str) -> Branch {
    Branch::new(project_id, name, mkdocs_yaml)
}

// ---------------------------------------------------------------------------
// Branches
// ---------------------------------------------------------------------------

/// In-memory downstream branch store
#[derive(Default)]
pub struct MockBranchesClient {
    branches: Mutex<HashMap<String, Vec<Branch>>>,
    rejection: Mutex<Option<DownstreamResponse>>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    write_calls: AtomicUsize,
}

impl MockBranchesClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branches(project_id: &str, branches: Vec<Branch>) -> Self {
        let client = Self::new();
        client
            .branches
            .lock()
            .unwrap()
            .insert(project_id.to_string(), branches);
        client
    }

    /// Write straight into the store, bypassing the gateway.
    pub fn put_out_of_band(&self, branch: Branch) {
        let mut store = self.branches.lock().unwrap();
        let list = store.entry(branch.project_id.clone()).or_default();
        match list.iter_mut().find(|b| b.name == branch.name) {
            Some(existing) => *existing = branch,
            None => list.push(branch),
        }
    }

    /// Make every following mutation answer with `status` and `body`.
    pub fn reject_writes(&self, status: u16, body: &str) {
        *self.rejection.lock().unwrap() = Some(DownstreamResponse::new(status, body));
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn rejection(&self) -> Option<DownstreamResponse> {
        self.rejection.lock().unwrap().clone()
    }
}

#[async_trait]
impl BranchesClient for MockBranchesClient {
    async fn list(&self, project_id: &str) -> GatewayResult<Vec<Branch>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .branches
            .lock()
            .unwrap()
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, project_id: &str, branch_name: &str) -> GatewayResult<Option<Branch>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .branches
            .lock()
            .unwrap()
            .get(project_id)
            .and_then(|list| list.iter().find(|b| b.name == branch_name).cloned()))
    }

    async fn create(&self, project_id: &str, branch: &Branch) -> GatewayResult<DownstreamResponse> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }

        let mut stored = branch.clone();
        stored.project_id = project_id.to_string();
        self.branches
            .lock()
            .unwrap()
            .entry(project_id.to_string())
            .or_default()
            .push(stored);
        Ok(DownstreamResponse::new(201, ""))
    }

    async fn update(
        &self,
        project_id: &str,
        branch_name: &str,
        branch: &Branch,
    ) -> GatewayResult<DownstreamResponse> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }

        let mut store = self.branches.lock().unwrap();
        let existing = store
            .get_mut(project_id)
            .and_then(|list| list.iter_mut().find(|b| b.name == branch_name));
        match existing {
            Some(existing) => {
                *existing = branch.clone();
                Ok(DownstreamResponse::ok())
            }
            None => Ok(DownstreamResponse::new(404, "branch not found")),
        }
    }

    async fn delete(&self, project_id: &str, branch_name: &str) -> GatewayResult<DownstreamResponse> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }

        if let Some(list) = self.branches.lock().unwrap().get_mut(project_id) {
            list.retain(|b| b.name != branch_name);
        }
        Ok(DownstreamResponse::ok())
    }
}

/// Branch gateway over a fresh cache
pub fn branch_gateway(client: Arc<MockBranchesClient>) -> BranchGateway<MockBranchesClient> {
    BranchGateway::new(
        client,
        Arc::new(BranchCache::from_config(&CacheConfig::default())),
    )
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// In-memory downstream project store that logs every call it receives
#[derive(Default)]
pub struct MockProjectsClient {
    projects: Mutex<HashMap<String, Project>>,
    members: Mutex<HashMap<String, HashSet<String>>>,
    listed_for: Mutex<Vec<String>>,
    tokens: Mutex<HashMap<String, String>>,
    rejection: Mutex<Option<DownstreamResponse>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockProjectsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, project: Project, token: &str) -> Self {
        self.tokens
            .lock()
            .unwrap()
            .insert(project.id.clone(), token.to_string());
        self.projects
            .lock()
            .unwrap()
            .insert(project.id.clone(), project);
        self
    }

    /// Limit the listing of `caller_id` to the given projects.
    pub fn with_member(self, caller_id: &str, project_ids: &[&str]) -> Self {
        self.members.lock().unwrap().insert(
            caller_id.to_string(),
            project_ids.iter().map(|id| id.to_string()).collect(),
        );
        self
    }

    pub fn reject_writes(&self, status: u16, body: &str) {
        *self.rejection.lock().unwrap() = Some(DownstreamResponse::new(status, body));
    }

    /// Caller ids the listings were requested for, in order.
    pub fn listed_for(&self) -> Vec<String> {
        self.listed_for.lock().unwrap().clone()
    }

    pub fn project(&self, project_id: &str) -> Option<Project> {
        self.projects.lock().unwrap().get(project_id).cloned()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn rejection(&self) -> Option<DownstreamResponse> {
        self.rejection.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectsClient for MockProjectsClient {
    async fn list(
        &self,
        filter: &ProjectsFilter,
        caller_id: &str,
    ) -> GatewayResult<FilteredResults<Project>> {
        self.record("list");
        self.listed_for.lock().unwrap().push(caller_id.to_string());

        let visible = self.members.lock().unwrap().get(caller_id).cloned();
        let mut projects: Vec<Project> = self
            .projects
            .lock()
            .unwrap()
            .values()
            .filter(|p| visible.as_ref().map(|ids| ids.contains(&p.id)).unwrap_or(true))
            .filter(|p| {
                filter
                    .query
                    .as_deref()
                    .map(|q| p.name.contains(q) || p.id.contains(q))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        projects.sort_by(|a, b| a.id.cmp(&b.id));

        let all_results = projects.len() as u64;
        let limit = filter.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        let page = filter.page.unwrap_or(0) as usize;
        let results = projects
            .into_iter()
            .skip(page.saturating_mul(limit))
            .take(limit)
            .collect();

        Ok(FilteredResults {
            results,
            all_results,
        })
    }

    async fn get(&self, project_id: &str) -> GatewayResult<Option<Project>> {
        self.record("get");
        Ok(self.project(project_id))
    }

    async fn create(&self, project: &Project) -> GatewayResult<DownstreamResponse> {
        self.record("create");
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }
        self.projects
            .lock()
            .unwrap()
            .insert(project.id.clone(), project.clone());
        Ok(DownstreamResponse::new(201, ""))
    }

    async fn update(&self, project_id: &str, project: &Project) -> GatewayResult<DownstreamResponse> {
        self.record("update");
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }
        self.projects
            .lock()
            .unwrap()
            .insert(project_id.to_string(), project.clone());
        Ok(DownstreamResponse::ok())
    }

    async fn delete(&self, project_id: &str) -> GatewayResult<DownstreamResponse> {
        self.record("delete");
        if let Some(rejection) = self.rejection() {
            return Ok(rejection);
        }
        self.projects.lock().unwrap().remove(project_id);
        Ok(DownstreamResponse::ok())
    }

    async fn access_token(&self, project_id: &str) -> GatewayResult<Option<AccessToken>> {
        self.record("access_token");
        Ok(self
            .tokens
            .lock()
            .unwrap()
            .get(project_id)
            .map(|token| AccessToken {
                access_token: token.clone(),
            }))
    }
}

/// Gate with an explicit allow list; everything else is denied
#[derive(Default)]
pub struct MockGate {
    allowed: Mutex<HashSet<(String, String, Operation)>>,
    creators: Mutex<HashSet<String>>,
    consultations: Mutex<Vec<(String, String, Operation)>>,
}

impl MockGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow(&self, caller: &str, project_id: &str, operation: Operation) {
        self.allowed.lock().unwrap().insert((
            caller.to_string(),
            project_id.to_string(),
            operation,
        ));
    }

    pub fn revoke(&self, caller: &str, project_id: &str, operation: Operation) {
        self.allowed.lock().unwrap().remove(&(
            caller.to_string(),
            project_id.to_string(),
            operation,
        ));
    }

    pub fn allow_create(&self, caller: &str) {
        self.creators.lock().unwrap().insert(caller.to_string());
    }

    pub fn consultations(&self) -> Vec<(String, String, Operation)> {
        self.consultations.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorizationGate for MockGate {
    async fn authorize(&self, caller: &Caller, project: &Project, operation: Operation) -> bool {
        let key = (caller.id().to_string(), project.id.clone(), operation);
        self.consultations.lock().unwrap().push(key.clone());
        self.allowed.lock().unwrap().contains(&key)
    }

    async fn authorize_create(&self, caller: &Caller) -> bool {
        self.consultations.lock().unwrap().push((
            caller.id().to_string(),
            String::new(),
            Operation::Create,
        ));
        self.creators.lock().unwrap().contains(caller.id())
    }
}

/// Records project assignments
#[derive(Default)]
pub struct MockAssignments {
    assigned: Mutex<Vec<(String, String)>>,
}

impl MockAssignments {
    pub fn assigned(&self) -> Vec<(String, String)> {
        self.assigned.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectAssignments for MockAssignments {
    async fn assign(&self, caller_id: &str, project_id: &str) -> GatewayResult<()> {
        self.assigned
            .lock()
            .unwrap()
            .push((caller_id.to_string(), project_id.to_string()));
        Ok(())
    }
}

/// Project gateway wired to mocks, plus handles on each mock
pub struct ProjectFixture {
    pub projects: Arc<MockProjectsClient>,
    pub gate: Arc<MockGate>,
    pub assignments: Arc<MockAssignments>,
    pub cache: Arc<BranchCache>,
    pub gateway: ProjectGateway<MockProjectsClient, MockGate, MockAssignments>,
}

impl ProjectFixture {
    pub fn new(projects: MockProjectsClient) -> Self {
        let projects = Arc::new(projects);
        let gate = Arc::new(MockGate::new());
        let assignments = Arc::new(MockAssignments::default());
        let cache = Arc::new(BranchCache::from_config(&CacheConfig::default()));
        let gateway = ProjectGateway::new(
            projects.clone(),
            gate.clone(),
            assignments.clone(),
            cache.clone(),
        );

        Self {
            projects,
            gate,
            assignments,
            cache,
            gateway,
        }
    }
}
