use desk_config::DeskConfig;
use desk_core::enums::Role;
use desk_core::routes::Route;
use desk_rbac::RbacContext;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::commands::shared::parse::secret_from;
use crate::context::{api_client, open_session};
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    user_id: String,
    name: String,
    role: Role,
    is_system_admin: bool,
    home: &'static str,
    active_organization: Option<String>,
    active_project: Option<String>,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &DeskConfig,
) -> anyhow::Result<()> {
    let password = secret_from(args.password.as_deref(), "DESK_PASSWORD", "password")?;
    let api = api_client(config)?;
    let session = open_session(config)?;

    let login = with_spinner("Signing in…", api.login(&args.email, &password)).await?;
    session.save(&login.access_token, &login.refresh_token, &login.user)?;
    tracing::debug!(user = %login.user.id, "session saved");

    // Pick and persist the initial organization/project right away.
    let rbac = RbacContext::new(api.with_token(login.access_token), session);
    rbac.refresh().await;

    let user = login.user;
    output(
        &AuthLoginResponse {
            authenticated: true,
            home: Route::home_for(user.role).path(),
            active_organization: rbac.active_organization(),
            active_project: rbac.active_project(),
            user_id: user.id,
            name: user.name,
            role: user.role,
            is_system_admin: user.is_system_admin,
        },
        flags.format,
    )
}
