//! Dashboard analytics, one endpoint per scope.

use desk_core::dashboard::{DashboardReport, DashboardScope};

use crate::{ApiClient, ApiError, RequestOptions, segment};

/// Endpoint serving the report for `scope`.
#[must_use]
pub fn report_path(scope: &DashboardScope) -> String {
    match scope {
        DashboardScope::System => "/analytics/system".to_string(),
        DashboardScope::Organization { organization_id } => {
            format!("/analytics/organizations/{}", segment(organization_id))
        }
        DashboardScope::Project { project_id } => {
            format!("/analytics/projects/{}", segment(project_id))
        }
        DashboardScope::Resolver => "/analytics/resolver".to_string(),
        DashboardScope::Requester => "/analytics/me".to_string(),
    }
}

impl ApiClient {
    /// Fetch the dashboard report. A `null` body reads as an empty report.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn dashboard(&self, scope: &DashboardScope) -> Result<DashboardReport, ApiError> {
        let report: Option<DashboardReport> =
            self.request(&report_path(scope), RequestOptions::get()).await?;
        Ok(report.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scope_has_its_own_endpoint() {
        assert_eq!(report_path(&DashboardScope::System), "/analytics/system");
        assert_eq!(
            report_path(&DashboardScope::Organization {
                organization_id: "org-1".into()
            }),
            "/analytics/organizations/org-1"
        );
        assert_eq!(
            report_path(&DashboardScope::Project {
                project_id: "proj-1".into()
            }),
            "/analytics/projects/proj-1"
        );
        assert_eq!(report_path(&DashboardScope::Resolver), "/analytics/resolver");
        assert_eq!(report_path(&DashboardScope::Requester), "/analytics/me");
    }
}
