pub mod branch_cache;
pub mod branch_gateway;
pub mod config_extractor;
pub mod project_gateway;

pub use branch_cache::{BranchCache, BranchList};
pub use branch_gateway::BranchGateway;
pub use config_extractor::{enrich, extract, ExtractError, SiteSettings, DEFAULT_DOCS_DIR};
pub use project_gateway::ProjectGateway;
