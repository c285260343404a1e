//! Context-scoped permission sets with hierarchical wildcards.
//!
//! Permissions are dot-segmented capability names (`ticket.create`). A
//! trailing `*` segment grants every more specific permission sharing the
//! prefix (`ticket.*` grants `ticket.create`), and a bare `*` grants
//! everything. System-admin status is not a permission; callers check it
//! separately.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The global wildcard.
pub const GLOBAL_WILDCARD: &str = "*";

/// Well-known permission names used by the client.
pub mod known {
    pub const COMMENT_CREATE: &str = "comment.create";
    pub const ORGANIZATION_CREATE: &str = "organization.create";
    pub const PROJECT_CREATE: &str = "project.create";
    pub const ANALYTICS_VIEW_ORG: &str = "analytics.view.org";
    pub const ANALYTICS_VIEW_PROJECT: &str = "analytics.view.project";
}

/// A set of granted permission strings.
///
/// An empty set grants nothing; "not loaded" and "nothing granted" are the same.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    #[must_use]
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(permissions.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Check whether `permission` is granted.
    ///
    /// Tries the exact string, then each broader `prefix.*` from the longest
    /// prefix down, then the global `*`.
    #[must_use]
    pub fn allows(&self, permission: &str) -> bool {
        if self.0.contains(permission) {
            return true;
        }

        let mut candidate = String::with_capacity(permission.len() + 1);
        for (dot, _) in permission.rmatch_indices('.') {
            candidate.clear();
            candidate.push_str(&permission[..=dot]);
            candidate.push('*');
            if self.0.contains(&candidate) {
                return true;
            }
        }

        self.0.contains(GLOBAL_WILDCARD)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
