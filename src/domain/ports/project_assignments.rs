use async_trait::async_trait;

use crate::domain::errors::GatewayResult;

/// Records which callers are assigned to which projects.
#[async_trait]
pub trait ProjectAssignments: Send + Sync {
    /// Assign `caller_id` to `project_id`
    async fn assign(&self, caller_id: &str, project_id: &str) -> GatewayResult<()>;
}
