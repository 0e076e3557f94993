//! Output formatting utilities for the CLI.

pub mod table;

use serde::Serialize;

pub use table::format_branches;

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
