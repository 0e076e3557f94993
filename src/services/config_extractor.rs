//! Branch enrichment from the embedded site configuration document.
//!
//! The document is parsed into a loose YAML tree and only two well-known
//! keys are looked up: `docs_dir` (defaults to `docs`) and `site_name`
//! (left unset when missing). A document that does not parse, or whose root
//! is not a mapping, is an error rather than a fallback to defaults.

use serde_yaml::Value;
use thiserror::Error;

use crate::domain::errors::{GatewayError, GatewayResult};
use crate::domain::models::{Branch, EnrichedBranch};

/// Content directory used when the configuration does not set one.
pub const DEFAULT_DOCS_DIR: &str = "docs";

const DOCS_DIR_KEY: &str = "docs_dir";
const SITE_NAME_KEY: &str = "site_name";

/// Settings derived from a branch configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Documentation source directory, `docs` when unset
    pub docs_dir: String,

    /// Site display name, if the document sets one
    pub site_name: Option<String>,
}

/// Why a configuration document could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The document is not valid YAML
    #[error("malformed YAML: {0}")]
    Malformed(String),

    /// The document root is not a mapping; carries the kind found instead
    #[error("document root must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A known key holds a sequence or mapping
    #[error("`{0}` must be a scalar value")]
    NotAScalar(&'static str),
}

/// Read `docs_dir` and `site_name` out of a raw configuration document.
pub fn extract(raw_document: &str) -> Result<SiteSettings, ExtractError> {
    let root: Value =
        serde_yaml::from_str(raw_document).map_err(|e| ExtractError::Malformed(e.to_string()))?;

    let mapping = match untag(&root) {
        Value::Mapping(mapping) => mapping,
        other => return Err(ExtractError::NotAMapping(kind(other))),
    };

    let docs_dir = match mapping.get(DOCS_DIR_KEY) {
        Some(value) => coerce(DOCS_DIR_KEY, value)?,
        None => None,
    }
    .unwrap_or_else(|| DEFAULT_DOCS_DIR.to_string());

    let site_name = match mapping.get(SITE_NAME_KEY) {
        Some(value) => coerce(SITE_NAME_KEY, value)?,
        None => None,
    };

    Ok(SiteSettings {
        docs_dir,
        site_name,
    })
}

/// Attach the derived settings to a branch.
pub fn enrich(branch: Branch) -> GatewayResult<EnrichedBranch> {
    let settings = extract(&branch.mkdocs_yaml).map_err(|e| GatewayError::ConfigParse {
        branch: branch.name.clone(),
        reason: e.to_string(),
    })?;

    Ok(EnrichedBranch {
        branch,
        docs_dir: settings.docs_dir,
        site_name: settings.site_name,
    })
}

/// Scalars become strings; an explicit null counts as missing.
fn coerce(key: &'static str, value: &Value) -> Result<Option<String>, ExtractError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Sequence(_) | Value::Mapping(_) => Err(ExtractError::NotAScalar(key)),
        Value::Tagged(tagged) => coerce(key, &tagged.value),
    }
}

fn untag(mut value: &Value) -> &Value {
    while let Value::Tagged(tagged) = value {
        value = &tagged.value;
    }
    value
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
