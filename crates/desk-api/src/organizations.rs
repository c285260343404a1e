//! Organization endpoints.

use desk_core::entities::Organization;
use serde::Serialize;

use crate::{ApiClient, ApiError, Listing, RequestOptions};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ApiError> {
        let listing: Listing<Organization> =
            self.request("/organizations", RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_organization(
        &self,
        organization: &NewOrganization,
    ) -> Result<Organization, ApiError> {
        let body = serde_json::to_value(organization).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.request("/organizations", RequestOptions::post(body)).await
    }
}
