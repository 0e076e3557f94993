//! Downstream documentation repository service adapter

pub mod client;

pub use client::DepositoryClient;
