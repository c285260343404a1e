mod login;
mod logout;
mod refresh;
mod status;

use desk_config::DeskConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `desk auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    flags: &GlobalFlags,
    config: &DeskConfig,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config).await,
        AuthCommands::Logout => logout::handle(flags, config),
        AuthCommands::Status => status::handle(flags, config),
        AuthCommands::Refresh => refresh::handle(flags, config).await,
    }
}
