use serde::{Deserialize, Serialize};

/// A documentation branch as stored by the downstream repository service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Branch name, unique within its project
    pub name: String,

    /// Owning project identifier
    #[serde(default)]
    pub project_id: String,

    /// Raw site configuration document (YAML) the enrichment reads from
    #[serde(default, rename = "mkDocsYaml")]
    pub mkdocs_yaml: String,
}

impl Branch {
    pub fn new(
        project_id: impl Into<String>,
        name: impl Into<String>,
        mkdocs_yaml: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            project_id: project_id.into(),
            mkdocs_yaml: mkdocs_yaml.into(),
        }
    }
}

/// A [`Branch`] plus the fields derived from its configuration document.
///
/// The derived fields are recomputed on every enrichment and never stored
/// apart from the branch they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedBranch {
    #[serde(flatten)]
    pub branch: Branch,

    /// Directory holding the documentation sources (`docs` unless configured)
    pub docs_dir: String,

    /// Site display name, present only when the configuration names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl EnrichedBranch {
    pub fn name(&self) -> &str {
        &self.branch.name
    }
}
