//! Where contexts and permissions come from.

use std::future::Future;

use desk_api::auth::MeContexts;
use desk_api::{ApiClient, ApiError};
use desk_core::permissions::PermissionSet;

/// Remote lookups the RBAC context depends on.
///
/// Implemented by [`ApiClient`]; tests substitute an in-memory source.
pub trait AccessSource: Send + Sync {
    /// Organizations and projects visible to the caller.
    fn fetch_contexts(&self) -> impl Future<Output = Result<MeContexts, ApiError>> + Send;

    /// Effective permissions in the given organization/project.
    fn fetch_permissions(
        &self,
        organization_id: Option<&str>,
        project_id: Option<&str>,
    ) -> impl Future<Output = Result<PermissionSet, ApiError>> + Send;
}

impl AccessSource for ApiClient {
    fn fetch_contexts(&self) -> impl Future<Output = Result<MeContexts, ApiError>> + Send {
        self.me_contexts()
    }

    fn fetch_permissions(
        &self,
        organization_id: Option<&str>,
        project_id: Option<&str>,
    ) -> impl Future<Output = Result<PermissionSet, ApiError>> + Send {
        self.me_permissions(organization_id, project_id)
    }
}
