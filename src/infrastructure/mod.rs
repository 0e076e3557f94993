//! Infrastructure layer module
//!
//! This module contains infrastructure adapters and external integrations:
//! - Downstream repository service client (reqwest)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod depository;
pub mod logging;
