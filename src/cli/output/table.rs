//! Table output formatting for CLI commands

use crate::domain::models::EnrichedBranch;
use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

/// Placeholder shown for branches without a configured site name.
const NO_SITE_NAME: &str = "-";

/// Format enriched branches as a table
pub fn format_branches(branches: &[EnrichedBranch]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Branch").add_attribute(Attribute::Bold),
        Cell::new("Docs dir").add_attribute(Attribute::Bold),
        Cell::new("Site name").add_attribute(Attribute::Bold),
    ]);

    for branch in branches {
        table.add_row(vec![
            Cell::new(branch.name()),
            Cell::new(&branch.docs_dir),
            Cell::new(branch.site_name.as_deref().unwrap_or(NO_SITE_NAME)),
        ]);
    }

    table.to_string()
}
