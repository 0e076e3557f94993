//! Adapters for in-process infrastructure.

pub mod cache;
