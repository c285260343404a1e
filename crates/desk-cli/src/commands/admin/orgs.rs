use desk_api::organizations::NewOrganization;
use desk_core::permissions::known;
use desk_core::routes::Route;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgCommands;
use crate::commands::shared::guard::{require_permission, require_route};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `desk org`.
pub async fn handle(
    action: &OrgCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_route(&ctx.user, Route::Organizations)?;

    match action {
        OrgCommands::List => {
            let orgs =
                with_spinner("Loading organizations…", ctx.api.list_organizations()).await?;
            output(&orgs, flags.format)
        }
        OrgCommands::Create { name, slug } => {
            require_permission(ctx, known::ORGANIZATION_CREATE).await?;
            let org = ctx
                .api
                .create_organization(&NewOrganization {
                    name: name.clone(),
                    slug: slug.clone(),
                })
                .await?;
            tracing::debug!(id = %org.id, "organization created");
            output(&org, flags.format)
        }
    }
}
