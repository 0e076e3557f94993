//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - BranchesClient / ProjectsClient: downstream repository service
//! - ProjectAssignments: caller ownership registration
//! - AuthorizationGate: per-resource, per-operation verdicts
//! - KeyedExpiringCache: shared in-memory cache with sliding expiration
//!
//! These traits keep the gateway services independent of HTTP, identity and
//! caching implementations.

pub mod authorization;
pub mod branches_client;
pub mod cache;
pub mod project_assignments;
pub mod projects_client;

pub use authorization::AuthorizationGate;
pub use branches_client::BranchesClient;
pub use cache::KeyedExpiringCache;
pub use project_assignments::ProjectAssignments;
pub use projects_client::ProjectsClient;
