//! `desk dashboard`: pick the caller's analytics scope, fetch the report, and
//! lay it out as text charts.
//!
//! Each scope shows a fixed panel list; panels whose data is missing from the
//! report are skipped.

use desk_api::ApiError;
use desk_core::dashboard::{
    CountBucket, DashboardReport, DashboardScope, ScopeInput, select_scope,
};
use desk_core::routes::Route;
use serde::Serialize;

use crate::charts::gauge::Thresholds;
use crate::charts::line::Series;
use crate::charts::{self, ChartOptions, fmt_value, label_width, pad_label};
use crate::cli::GlobalFlags;
use crate::commands::shared::guard::require_route;
use crate::context::AppContext;
use crate::output::output_with_text;
use crate::progress::with_spinner;
use crate::ui;

const EMPTY: &str = "No data available";
const SLA: Thresholds = Thresholds {
    warn: 80.0,
    good: 95.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Panel {
    Summary,
    Trend,
    Status,
    Priority,
    Type,
    Workload,
    ResolutionTimes,
    Activity,
    Performance,
    Sla,
}

impl Panel {
    const fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Trend => "Ticket trend",
            Self::Status => "By status",
            Self::Priority => "By priority",
            Self::Type => "By type",
            Self::Workload => "Resolver workload",
            Self::ResolutionTimes => "Resolution times",
            Self::Activity => "Activity",
            Self::Performance => "Resolver performance",
            Self::Sla => "SLA compliance",
        }
    }
}

const OVERVIEW_PANELS: &[Panel] = &[
    Panel::Summary,
    Panel::Trend,
    Panel::Status,
    Panel::Priority,
    Panel::Type,
    Panel::Workload,
    Panel::ResolutionTimes,
    Panel::Activity,
    Panel::Sla,
];
const RESOLVER_PANELS: &[Panel] = &[
    Panel::Summary,
    Panel::Trend,
    Panel::Status,
    Panel::Priority,
    Panel::ResolutionTimes,
    Panel::Performance,
    Panel::Sla,
];
const REQUESTER_PANELS: &[Panel] = &[Panel::Summary, Panel::Status, Panel::Trend, Panel::Type];

const fn panels_for(scope: &DashboardScope) -> &'static [Panel] {
    match scope {
        DashboardScope::System
        | DashboardScope::Organization { .. }
        | DashboardScope::Project { .. } => OVERVIEW_PANELS,
        DashboardScope::Resolver => RESOLVER_PANELS,
        DashboardScope::Requester => REQUESTER_PANELS,
    }
}

#[derive(Debug, Serialize)]
struct DashboardView<'a> {
    scope: &'a DashboardScope,
    report: &'a DashboardReport,
}

/// Handle `desk dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_route(&ctx.user, Route::Dashboard)?;

    let state = ctx.access().await.snapshot();
    let scope = select_scope(ScopeInput {
        is_system_admin: state.is_system_admin || ctx.user.is_system_admin,
        permissions: &state.permissions,
        role: ctx.user.role,
        active_organization: state.active_organization.as_deref(),
        active_project: state.active_project.as_deref(),
    });
    tracing::debug!(?scope, "dashboard scope selected");

    let report = with_spinner("Loading dashboard…", ctx.api.dashboard(&scope))
        .await
        .map_err(load_failed)?;

    output_with_text(
        &DashboardView {
            scope: &scope,
            report: &report,
        },
        flags.format,
        || compose(&scope, &report, chart_options()),
    )
}

/// Keeps the API error as the source so callers can still inspect its status.
fn load_failed(error: ApiError) -> anyhow::Error {
    anyhow::Error::from(error).context("Error loading dashboard")
}

fn chart_options() -> ChartOptions {
    let prefs = ui::prefs();
    ChartOptions {
        width: prefs
            .term_width
            .map_or(40, |width| width.saturating_sub(32).clamp(16, 60)),
        color: prefs.color,
    }
}

fn heading(scope: &DashboardScope) -> String {
    match scope {
        DashboardScope::Organization { organization_id } => {
            format!("{} ({organization_id})", scope.label())
        }
        DashboardScope::Project { project_id } => format!("{} ({project_id})", scope.label()),
        DashboardScope::System | DashboardScope::Resolver | DashboardScope::Requester => {
            scope.label().to_string()
        }
    }
}

/// Lay out every panel of `scope` that has data.
fn compose(scope: &DashboardScope, report: &DashboardReport, opts: ChartOptions) -> String {
    let mut blocks = vec![heading(scope)];
    for panel in panels_for(scope) {
        if let Some(body) = render_panel(*panel, report, opts) {
            blocks.push(format!("{}\n{body}", panel.title()));
        }
    }
    if blocks.len() == 1 {
        blocks.push(EMPTY.to_string());
    }
    blocks.join("\n\n")
}

fn render_panel(panel: Panel, report: &DashboardReport, opts: ChartOptions) -> Option<String> {
    let body = match panel {
        Panel::Summary => {
            if report.summary.is_empty() {
                return None;
            }
            let lw = label_width(report.summary.iter().map(|card| card.label.as_str()));
            report
                .summary
                .iter()
                .map(|card| format!("  {}  {}", pad_label(&card.label, lw), fmt_value(card.value)))
                .collect::<Vec<_>>()
                .join("\n")
        }
        Panel::Trend => {
            if report.ticket_trend.is_empty() {
                return None;
            }
            let created = report.ticket_trend.iter().map(|p| count(p.created)).collect();
            let resolved = report.ticket_trend.iter().map(|p| count(p.resolved)).collect();
            charts::line::render(
                &[
                    Series {
                        name: "created",
                        values: created,
                    },
                    Series {
                        name: "resolved",
                        values: resolved,
                    },
                ],
                opts,
            )
        }
        Panel::Status => charts::donut::render(&non_empty(&report.status_breakdown)?, opts),
        Panel::Priority => charts::bar::render(&non_empty(&report.priority_breakdown)?, opts),
        Panel::Type => charts::donut::render(&non_empty(&report.type_breakdown)?, opts),
        Panel::Workload => charts::bar::render(&non_empty(&report.resolver_workload)?, opts),
        Panel::ResolutionTimes => {
            if report.resolution_times.is_empty() {
                return None;
            }
            charts::scatter::render(
                &report.resolution_times,
                8,
                "hours to resolve",
                "age (days)",
                opts,
            )
        }
        Panel::Activity => {
            if report.activity_heatmap.is_empty() {
                return None;
            }
            charts::heatmap::render(&report.activity_heatmap, opts)
        }
        Panel::Performance => {
            if report.resolver_performance.is_empty() {
                return None;
            }
            charts::radar::render(&report.resolver_performance, opts)
        }
        Panel::Sla => charts::gauge::render(Some(report.sla_compliance?), 100.0, SLA, opts),
    };
    Some(body)
}

fn non_empty(buckets: &[CountBucket]) -> Option<Vec<(String, f64)>> {
    if buckets.is_empty() {
        return None;
    }
    Some(
        buckets
            .iter()
            .map(|bucket| (bucket.label.clone(), count(bucket.count)))
            .collect(),
    )
}

#[allow(clippy::cast_precision_loss)]
fn count(value: u64) -> f64 {
    value as f64
}
