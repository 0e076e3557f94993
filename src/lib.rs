//! Bibliotheca gateway core
//!
//! The gateway exposes project and branch metadata and forwards mutations to
//! the downstream documentation repository service. This crate holds the
//! stateful core of that gateway:
//!
//! - a cache-aside store of enriched branch collections with sliding
//!   expiration and invalidation after every successful write
//! - enrichment of branches from their embedded site configuration
//! - per-resource, per-operation authorization before project reads and
//!   mutations are forwarded
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, error taxonomy and port traits
//! - **Adapters** (`adapters`): the moka-backed expiring cache
//! - **Service Layer** (`services`): enrichment, caching and gateway orchestration
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, configuration, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bibliotheca_gateway::{BranchCache, BranchGateway, CacheConfig, DepositoryClient, DepositoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cache = Arc::new(BranchCache::from_config(&CacheConfig::default()));
//!     let client = Arc::new(DepositoryClient::new(&DepositoryConfig::default())?);
//!     let gateway = BranchGateway::new(client, cache);
//!     let branches = gateway.list_branches("docs-team").await?;
//!     println!("{} branches", branches.len());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AccessToken, Branch, CacheConfig, Caller, Config, DepositoryConfig, DownstreamResponse,
    EnrichedBranch, FilteredResults, LoggingConfig, Operation, Project, ProjectsFilter,
};
pub use domain::ports::{
    AuthorizationGate, BranchesClient, KeyedExpiringCache, ProjectAssignments, ProjectsClient,
};
pub use domain::{GatewayError, GatewayResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::depository::DepositoryClient;
pub use services::{BranchCache, BranchGateway, ProjectGateway};
