//! Domain errors for the Bibliotheca gateway.

use thiserror::Error;

use super::models::Operation;

/// Errors surfaced by the gateway to the request boundary.
///
/// None of these are recovered or retried locally; the boundary maps them
/// to caller-visible responses.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Caller '{caller}' is not allowed to {operation} project '{project_id}'")]
    Forbidden {
        caller: String,
        project_id: String,
        operation: Operation,
    },

    #[error("During creating the new branch error occurs: {0}")]
    CreateBranch(String),

    #[error("During updating the branch error occurs: {0}")]
    UpdateBranch(String),

    #[error("During deleting the branch error occurs: {0}")]
    DeleteBranch(String),

    #[error("During creating the new project error occurs: {0}")]
    CreateProject(String),

    #[error("During updating the project error occurs: {0}")]
    UpdateProject(String),

    #[error("During deleting the project error occurs: {0}")]
    DeleteProject(String),

    #[error("Invalid configuration document for branch '{branch}': {reason}")]
    ConfigParse { branch: String, reason: String },

    #[error("Downstream request failed: {0}")]
    Downstream(String),
}

impl GatewayError {
    /// Returns true for outcomes that mean "nothing there" rather than a failure.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true when the authorization gate refused the operation.
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

/// Result alias used across the gateway services.
pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Downstream(format!("request timed out: {err}"))
        } else {
            GatewayError::Downstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Downstream(format!("malformed downstream payload: {err}"))
    }
}
