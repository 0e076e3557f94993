pub mod branch;
pub mod caller;
pub mod config;
pub mod downstream;
pub mod project;

pub use branch::{Branch, EnrichedBranch};
pub use caller::{Caller, Operation};
pub use config::{CacheConfig, Config, DepositoryConfig, LogFormat, LoggingConfig, RotationPolicy};
pub use downstream::DownstreamResponse;
pub use project::{AccessToken, FilteredResults, Project, ProjectsFilter};
