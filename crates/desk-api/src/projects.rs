//! Project endpoints.

use desk_core::entities::Project;
use serde::Serialize;

use crate::{ApiClient, ApiError, Listing, RequestOptions};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ApiClient {
    /// List projects, optionally only those of one organization.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_projects(
        &self,
        organization_id: Option<&str>,
    ) -> Result<Vec<Project>, ApiError> {
        let path = organization_id.map_or_else(
            || "/projects".to_string(),
            |id| format!("/projects?organizationId={}", urlencoding::encode(id)),
        );
        let listing: Listing<Project> = self.request(&path, RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        let body = serde_json::to_value(project).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.request("/projects", RequestOptions::post(body)).await
    }
}
