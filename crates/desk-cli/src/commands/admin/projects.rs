use desk_api::projects::NewProject;
use desk_core::permissions::known;
use desk_core::routes::Route;
use desk_rbac::RbacError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::guard::{require_permission, require_route};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `desk project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_route(&ctx.user, Route::Projects)?;

    match action {
        ProjectCommands::List { org } => {
            let org = organization_or_active(org.as_deref(), ctx).await;
            let projects =
                with_spinner("Loading projects…", ctx.api.list_projects(org.as_deref())).await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Create { name, org, slug } => {
            let organization_id = organization_or_active(org.as_deref(), ctx)
                .await
                .ok_or(RbacError::NoActiveOrganization)?;
            require_permission(ctx, known::PROJECT_CREATE).await?;
            let project = ctx
                .api
                .create_project(&NewProject {
                    name: name.clone(),
                    organization_id,
                    slug: slug.clone(),
                })
                .await?;
            tracing::debug!(id = %project.id, "project created");
            output(&project, flags.format)
        }
    }
}

async fn organization_or_active(explicit: Option<&str>, ctx: &AppContext) -> Option<String> {
    match explicit {
        Some(id) => Some(id.to_string()),
        None => ctx.access().await.active_organization(),
    }
}
