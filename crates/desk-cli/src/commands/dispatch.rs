use desk_api::ApiError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let result = match command {
        Commands::Context { action } => commands::context::handle(&action, ctx, flags).await,
        Commands::Ticket { action } => commands::ticket::handle(&action, ctx, flags).await,
        Commands::Comment { action } => commands::comment::handle(&action, ctx, flags).await,
        Commands::Timeline { id } => commands::comment::timeline(&id, ctx, flags).await,
        Commands::User { action } => commands::admin::users(&action, ctx, flags).await,
        Commands::Org { action } => commands::admin::orgs(&action, ctx, flags).await,
        Commands::Project { action } => commands::admin::projects(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Auth { .. } => anyhow::bail!("auth commands run before a session is opened"),
    };
    result.map_err(with_reauth_hint)
}

/// Rejected credentials get a hint on how to recover.
fn with_reauth_hint(error: anyhow::Error) -> anyhow::Error {
    match error.downcast_ref::<ApiError>() {
        Some(api) if api.status() == Some(401) => {
            error.context("session rejected: run `desk auth refresh` or `desk auth login`")
        }
        _ => error,
    }
}
