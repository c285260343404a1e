//! Authentication and caller-context endpoints.

use desk_core::entities::{Organization, Project, User};
use desk_core::permissions::PermissionSet;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ApiClient, ApiError, RequestOptions};

/// Issued on a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub user: User,
}

/// Issued by the refresh endpoint. The refresh token may or may not rotate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    #[serde(alias = "token")]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Organizations and projects the caller can see.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MeContexts {
    pub organizations: Vec<Organization>,
    pub projects: Vec<Project>,
    pub is_system_admin: bool,
}

#[derive(Deserialize)]
struct PermissionsResponse {
    #[serde(default)]
    permissions: Vec<String>,
}

impl ApiClient {
    /// Exchange credentials for tokens and the user profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] (usually 401) on bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.request(
            "/auth/login",
            RequestOptions::post(json!({ "email": email, "password": password })).public(),
        )
        .await
    }

    /// Trade a refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] if the refresh token is rejected.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        self.request(
            "/auth/refresh",
            RequestOptions::post(json!({ "refreshToken": refresh_token })).public(),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn me_contexts(&self) -> Result<MeContexts, ApiError> {
        self.request("/auth/me/contexts", RequestOptions::get()).await
    }

    /// Effective permissions of the caller in the given context.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn me_permissions(
        &self,
        organization_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<PermissionSet, ApiError> {
        let mut query = Vec::new();
        if let Some(id) = organization_id {
            query.push(format!("organizationId={}", urlencoding::encode(id)));
        }
        if let Some(id) = project_id {
            query.push(format!("projectId={}", urlencoding::encode(id)));
        }
        let path = if query.is_empty() {
            "/auth/me/permissions".to_string()
        } else {
            format!("/auth/me/permissions?{}", query.join("&"))
        };
        let resp: PermissionsResponse = self.request(&path, RequestOptions::get()).await?;
        Ok(resp.permissions.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_token_alias() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"token":"t","user":{"id":"u","name":"N","email":"e@x","role":"ADMIN"}}"#,
        )
        .expect("parse");
        assert_eq!(resp.access_token, "t");
        assert!(resp.refresh_token.is_empty());
    }

    #[test]
    fn contexts_default_when_sparse() {
        let ctx: MeContexts = serde_json::from_str("{}").expect("parse");
        assert!(ctx.organizations.is_empty());
        assert!(!ctx.is_system_admin);
    }
}
