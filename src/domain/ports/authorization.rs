use async_trait::async_trait;

use crate::domain::models::{Caller, Operation, Project};

/// Per-resource, per-operation authorization decision.
///
/// Verdicts must not be cached by callers: assignments and permissions may
/// change between two requests of the same caller.
#[async_trait]
pub trait AuthorizationGate: Send + Sync {
    /// Decide whether `caller` may perform `operation` on an existing `project`
    async fn authorize(&self, caller: &Caller, project: &Project, operation: Operation) -> bool;

    /// Decide whether `caller` may create projects at all
    ///
    /// Evaluated before the project exists, so it only looks at the caller.
    async fn authorize_create(&self, caller: &Caller) -> bool;
}
