//! Choosing the active organization and project after contexts load.

use desk_api::auth::MeContexts;
use desk_core::entities::Project;
use serde::Serialize;

/// The organization/project pair in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub organization: Option<String>,
    pub project: Option<String>,
}

/// Reconcile a persisted selection with freshly fetched contexts.
///
/// A persisted id that no longer appears in the fetched lists is discarded.
/// Without a valid organization the first one returned is used. Within the
/// chosen organization the persisted project is kept only if it belongs to
/// it, otherwise the organization's first project (if any) is used.
#[must_use]
pub fn auto_select(
    contexts: &MeContexts,
    stored_organization: Option<&str>,
    stored_project: Option<&str>,
) -> Selection {
    let organization = stored_organization
        .filter(|id| contexts.organizations.iter().any(|o| o.id == *id))
        .or_else(|| contexts.organizations.first().map(|o| o.id.as_str()))
        .map(str::to_string);

    let Some(org_id) = organization.as_deref() else {
        return Selection::default();
    };

    let project = stored_project
        .filter(|id| {
            contexts
                .projects
                .iter()
                .any(|p| p.id == *id && p.belongs_to(org_id))
        })
        .map(str::to_string)
        .or_else(|| first_project_in(&contexts.projects, org_id));

    Selection {
        organization,
        project,
    }
}

/// The first project in `projects` that belongs to `organization`.
#[must_use]
pub fn first_project_in(projects: &[Project], organization: &str) -> Option<String> {
    projects
        .iter()
        .find(|p| p.belongs_to(organization))
        .map(|p| p.id.clone())
}
