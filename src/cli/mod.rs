//! Command-line interface over the branch gateway.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{BranchCommands, Cli, Commands};

use crate::domain::GatewayError;

/// Print an error and exit with a status reflecting its kind.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    let code = match err.downcast_ref::<GatewayError>() {
        Some(GatewayError::NotFound(_)) => 2,
        Some(GatewayError::Forbidden { .. }) => 3,
        _ => 1,
    };

    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(code)
}
