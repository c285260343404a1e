//! Dashboard scope selection and analytics report shapes.
//!
//! A dashboard is a read-only view. The only logic is picking which scope
//! the caller sees, in descending privilege:
//!
//! ```text
//! system admin → organization owner → project manager → resolver → requester
//! ```
//!
//! Each branch applies only if none before it did.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Role;
use crate::permissions::{PermissionSet, known};

/// Which analytics view the caller is entitled to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum DashboardScope {
    System,
    Organization { organization_id: String },
    Project { project_id: String },
    Resolver,
    Requester,
}

impl DashboardScope {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::System => "System overview",
            Self::Organization { .. } => "Organization overview",
            Self::Project { .. } => "Project overview",
            Self::Resolver => "My assignments",
            Self::Requester => "My tickets",
        }
    }
}

impl fmt::Display for DashboardScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inputs to scope selection, taken from the RBAC context and session user.
#[derive(Debug, Clone, Copy)]
pub struct ScopeInput<'a> {
    pub is_system_admin: bool,
    pub permissions: &'a PermissionSet,
    pub role: Role,
    pub active_organization: Option<&'a str>,
    pub active_project: Option<&'a str>,
}

/// Pick the dashboard scope.
///
/// The organization and project branches need an active selection to
/// address; without one they fall through to the next branch.
#[must_use]
pub fn select_scope(input: ScopeInput<'_>) -> DashboardScope {
    if input.is_system_admin {
        return DashboardScope::System;
    }
    if input.permissions.allows(known::ANALYTICS_VIEW_ORG)
        && let Some(organization_id) = input.active_organization
    {
        return DashboardScope::Organization {
            organization_id: organization_id.to_string(),
        };
    }
    if input.permissions.allows(known::ANALYTICS_VIEW_PROJECT)
        && let Some(project_id) = input.active_project
    {
        return DashboardScope::Project {
            project_id: project_id.to_string(),
        };
    }
    if input.role == Role::Resolver {
        return DashboardScope::Resolver;
    }
    DashboardScope::Requester
}

// ---------------------------------------------------------------------------
// Report shapes
// ---------------------------------------------------------------------------

/// A headline number ("Open tickets: 12").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCard {
    pub label: String,
    pub value: f64,
}

/// Tickets created and resolved on one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub resolved: u64,
}

/// A labelled count (status, priority, type, or resolver workload).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CountBucket {
    pub label: String,
    pub count: u64,
}

/// One point of a scatter plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One cell of the activity heatmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub row: String,
    pub column: String,
    pub value: f64,
}

/// One axis of a radar chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RadarAxis {
    pub axis: String,
    pub value: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Aggregate analytics for one dashboard scope.
///
/// Every section is optional on the wire; scopes fill the sections relevant
/// to them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardReport {
    pub summary: Vec<SummaryCard>,
    pub ticket_trend: Vec<TrendPoint>,
    pub status_breakdown: Vec<CountBucket>,
    pub priority_breakdown: Vec<CountBucket>,
    pub type_breakdown: Vec<CountBucket>,
    pub resolver_workload: Vec<CountBucket>,
    /// x: hours to resolve, y: ticket age in days at resolution.
    pub resolution_times: Vec<ScatterPoint>,
    pub activity_heatmap: Vec<HeatmapCell>,
    pub resolver_performance: Vec<RadarAxis>,
    /// Percentage of tickets resolved within SLA, `0..=100`.
    pub sla_compliance: Option<f64>,
}

impl DashboardReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.ticket_trend.is_empty()
            && self.status_breakdown.is_empty()
            && self.priority_breakdown.is_empty()
            && self.type_breakdown.is_empty()
            && self.resolver_workload.is_empty()
            && self.resolution_times.is_empty()
            && self.activity_heatmap.is_empty()
            && self.resolver_performance.is_empty()
            && self.sla_compliance.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn input<'a>(permissions: &'a PermissionSet, role: Role) -> ScopeInput<'a> {
        ScopeInput {
            is_system_admin: false,
            permissions,
            role,
            active_organization: Some("org-1"),
            active_project: Some("proj-1"),
        }
    }

    #[test]
    fn system_admin_wins_over_everything() {
        let perms = PermissionSet::new(["*"]);
        let scope = select_scope(ScopeInput {
            is_system_admin: true,
            ..input(&perms, Role::Manager)
        });
        assert_eq!(scope, DashboardScope::System);
    }

    #[test]
    fn org_permission_selects_organization_scope() {
        let perms = PermissionSet::new(["analytics.view.org", "analytics.view.project"]);
        assert_eq!(
            select_scope(input(&perms, Role::Manager)),
            DashboardScope::Organization {
                organization_id: "org-1".into()
            }
        );
    }

    #[test]
    fn project_permission_selects_project_scope() {
        let perms = PermissionSet::new(["analytics.view.project"]);
        assert_eq!(
            select_scope(input(&perms, Role::Manager)),
            DashboardScope::Project {
                project_id: "proj-1".into()
            }
        );
    }

    #[test]
    fn wildcard_grants_organization_scope() {
        let perms = PermissionSet::new(["analytics.*"]);
        assert!(matches!(
            select_scope(input(&perms, Role::User)),
            DashboardScope::Organization { .. }
        ));
    }

    #[test]
    fn missing_selection_falls_through() {
        let perms = PermissionSet::new(["analytics.view.org"]);
        let scope = select_scope(ScopeInput {
            active_organization: None,
            active_project: None,
            ..input(&perms, Role::Resolver)
        });
        assert_eq!(scope, DashboardScope::Resolver);
    }

    #[test]
    fn plain_roles_get_personal_scopes() {
        let perms = PermissionSet::default();
        assert_eq!(select_scope(input(&perms, Role::Resolver)), DashboardScope::Resolver);
        assert_eq!(select_scope(input(&perms, Role::User)), DashboardScope::Requester);
        assert_eq!(select_scope(input(&perms, Role::Manager)), DashboardScope::Requester);
    }

    #[test]
    fn sparse_report_deserializes_with_defaults() {
        let raw = r#"{"slaCompliance": 91.5, "statusBreakdown": [{"label": "OPEN", "count": 3}]}"#;
        let report: DashboardReport = serde_json::from_str(raw).expect("report should parse");
        assert_eq!(report.sla_compliance, Some(91.5));
        assert_eq!(report.status_breakdown.len(), 1);
        assert!(report.ticket_trend.is_empty());
        assert!(!report.is_empty());
        assert!(DashboardReport::default().is_empty());
    }
}
