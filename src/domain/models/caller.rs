use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operation a caller wants to perform on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Read,
    Update,
    Delete,
    Create,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Create => "create",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "read" => Ok(Self::Read),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "create" => Ok(Self::Create),
            other => Err(format!("unknown operation: {other}")),
        }
    }
}

/// Authenticated caller, as handed over by the identity subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    id: String,
    claims: BTreeSet<String>,
}

impl Caller {
    /// Identifiers are normalized to lower case.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            id: id.as_ref().to_lowercase(),
            claims: BTreeSet::new(),
        }
    }

    pub fn with_claims<I, S>(mut self, claims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.claims.extend(claims.into_iter().map(Into::into));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn claims(&self) -> &BTreeSet<String> {
        &self.claims
    }

    pub fn has_claim(&self, claim: &str) -> bool {
        self.claims.contains(claim)
    }
}
