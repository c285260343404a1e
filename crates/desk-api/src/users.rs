//! Admin user management.

use desk_core::entities::User;
use desk_core::enums::Role;
use serde::Serialize;
use serde_json::json;

use crate::{ApiClient, ApiError, Listing, RequestOptions, segment};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let listing: Listing<User> = self.request("/users", RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        let body = serde_json::to_value(user).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.request("/users", RequestOptions::post(body)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_user_role(&self, id: &str, role: Role) -> Result<User, ApiError> {
        self.request(
            &format!("/users/{}/role", segment(id)),
            RequestOptions::patch(Some(json!({ "role": role }))),
        )
        .await
    }

    /// Enable or disable an account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn set_user_active(&self, id: &str, active: bool) -> Result<User, ApiError> {
        self.request(
            &format!("/users/{}/status", segment(id)),
            RequestOptions::patch(Some(json!({ "isActive": active }))),
        )
        .await
    }
}
