use desk_api::users::NewUser;
use desk_core::entities::User;
use desk_core::enums::Role;
use desk_core::routes::Route;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::commands::shared::guard::require_route;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{parse_optional_tag, parse_tag, secret_from};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    role: Role,
    system_admin: bool,
    active: bool,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            system_admin: user.is_system_admin,
            active: user.is_active,
        }
    }
}

/// Handle `desk user`. Admin section only.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_route(&ctx.user, Route::AdminUsers)?;

    match action {
        UserCommands::List { role } => {
            let role = parse_optional_tag::<Role>(role.as_deref())?;
            let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);
            let mut users = with_spinner("Loading users…", ctx.api.list_users()).await?;
            if let Some(role) = role {
                users.retain(|user| user.role == role);
            }
            users.truncate(limit);
            let rows: Vec<UserRow> = users.into_iter().map(UserRow::from).collect();
            output(&rows, flags.format)
        }
        UserCommands::Create(args) => {
            let new_user = NewUser {
                name: args.name.clone(),
                email: args.email.clone(),
                password: secret_from(
                    args.password.as_deref(),
                    "DESK_NEW_USER_PASSWORD",
                    "initial password",
                )?,
                role: parse_tag(&args.role)?,
            };
            let user = ctx.api.create_user(&new_user).await?;
            output(&UserRow::from(user), flags.format)
        }
        UserCommands::SetRole { id, role } => {
            let role: Role = parse_tag(role)?;
            if id == &ctx.user.id && role != ctx.user.role {
                tracing::warn!("changing your own role takes effect after the next login");
            }
            let user = ctx.api.update_user_role(id, role).await?;
            output(&UserRow::from(user), flags.format)
        }
        UserCommands::Enable { id } => set_active(id, true, ctx, flags).await,
        UserCommands::Disable { id } => {
            if id == &ctx.user.id {
                anyhow::bail!("refusing to disable your own account");
            }
            set_active(id, false, ctx, flags).await
        }
    }
}

async fn set_active(
    id: &str,
    active: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.api.set_user_active(id, active).await?;
    output(&UserRow::from(user), flags.format)
}
