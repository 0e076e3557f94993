//! Domain layer for the Bibliotheca gateway
//!
//! This module contains the gateway's models, error taxonomy and port traits.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{GatewayError, GatewayResult};
