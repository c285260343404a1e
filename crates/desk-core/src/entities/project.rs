use serde::{Deserialize, Serialize};

/// A project, scoped beneath exactly one organization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(alias = "orgId")]
    pub organization_id: String,
}

impl Project {
    #[must_use]
    pub fn belongs_to(&self, organization_id: &str) -> bool {
        self.organization_id == organization_id
    }
}
