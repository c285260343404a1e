use desk_rbac::{LoadOutcome, Phase, RbacState};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContextCommands;
use crate::context::AppContext;
use crate::output::{output, output_with_text};

#[derive(Debug, Serialize)]
struct ContextEntry {
    id: String,
    name: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ContextView {
    phase: Phase,
    is_system_admin: bool,
    active_organization: Option<String>,
    active_project: Option<String>,
    organizations: Vec<ContextEntry>,
    projects: Vec<ContextEntry>,
}

#[derive(Debug, Serialize)]
struct SwitchResponse {
    active_organization: Option<String>,
    active_project: Option<String>,
    permissions: usize,
    superseded: bool,
}

#[derive(Debug, Serialize)]
struct PermissionsResponse {
    is_system_admin: bool,
    permissions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CanResponse {
    permission: String,
    granted: bool,
}

/// Handle `desk context`.
pub async fn handle(
    action: &ContextCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let access = ctx.access().await;
    match action {
        ContextCommands::Show => {
            let view = context_view(&access.snapshot());
            output_with_text(&view, flags.format, || describe(&view))
        }
        ContextCommands::SwitchOrg { id } => {
            let outcome = access.switch_organization(id).await?;
            output(&switch_response(&access.snapshot(), outcome), flags.format)
        }
        ContextCommands::SwitchProject { id } => {
            let outcome = access.switch_project(id).await?;
            output(&switch_response(&access.snapshot(), outcome), flags.format)
        }
        ContextCommands::Permissions => {
            let state = access.snapshot();
            output(
                &PermissionsResponse {
                    is_system_admin: state.is_system_admin || ctx.user.is_system_admin,
                    permissions: state.permissions.iter().map(str::to_string).collect(),
                },
                flags.format,
            )
        }
        ContextCommands::Can { permission } => {
            let granted = ctx.can(permission).await;
            output(
                &CanResponse {
                    permission: permission.clone(),
                    granted,
                },
                flags.format,
            )?;
            if !granted {
                anyhow::bail!("'{permission}' is not granted in the active context");
            }
            Ok(())
        }
    }
}

fn context_view(state: &RbacState) -> ContextView {
    let active_org = state.active_organization.as_deref();
    let active_project = state.active_project.as_deref();
    ContextView {
        phase: state.phase,
        is_system_admin: state.is_system_admin,
        active_organization: state.active_organization.clone(),
        active_project: state.active_project.clone(),
        organizations: state
            .organizations
            .iter()
            .map(|org| ContextEntry {
                id: org.id.clone(),
                name: org.name.clone(),
                active: Some(org.id.as_str()) == active_org,
            })
            .collect(),
        projects: state
            .active_projects()
            .map(|project| ContextEntry {
                id: project.id.clone(),
                name: project.name.clone(),
                active: Some(project.id.as_str()) == active_project,
            })
            .collect(),
    }
}

fn switch_response(state: &RbacState, outcome: LoadOutcome) -> SwitchResponse {
    SwitchResponse {
        active_organization: state.active_organization.clone(),
        active_project: state.active_project.clone(),
        permissions: state.permissions.len(),
        superseded: outcome == LoadOutcome::Superseded,
    }
}

fn describe(view: &ContextView) -> String {
    let mut lines = vec!["Organizations:".to_string()];
    push_entries(&mut lines, &view.organizations, "no organizations available");
    lines.push("Projects:".to_string());
    push_entries(&mut lines, &view.projects, "no projects in the active organization");
    if view.is_system_admin {
        lines.push("(system administrator)".to_string());
    }
    lines.join("\n")
}

fn push_entries(lines: &mut Vec<String>, entries: &[ContextEntry], empty: &str) {
    if entries.is_empty() {
        lines.push(format!("    {empty}"));
    }
    for entry in entries {
        let marker = if entry.active { '*' } else { ' ' };
        lines.push(format!("  {marker} {}  {}", entry.id, entry.name));
    }
}
