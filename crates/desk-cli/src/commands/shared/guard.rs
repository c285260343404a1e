use desk_api::tickets::TicketScope;
use desk_core::entities::User;
use desk_core::enums::Role;
use desk_core::routes::Route;

use crate::context::AppContext;

/// Fail unless `user` may enter `route`.
pub fn require_route(user: &User, route: Route) -> anyhow::Result<()> {
    if route.allows(user) {
        return Ok(());
    }
    anyhow::bail!(
        "{} accounts cannot open {route} (your home is {})",
        user.role.descriptor().label,
        Route::home_for(user.role)
    )
}

/// Fail unless `permission` is granted in the active context.
pub async fn require_permission(ctx: &AppContext, permission: &str) -> anyhow::Result<()> {
    if ctx.can(permission).await {
        return Ok(());
    }
    anyhow::bail!("permission denied: '{permission}' is not granted in the active context")
}

/// The ticket section and listing a user works from.
///
/// System admins get the full listing regardless of role.
#[must_use]
pub const fn ticket_section(user: &User) -> (Route, TicketScope) {
    if user.is_system_admin {
        return (Route::ManagerTickets, TicketScope::All);
    }
    match user.role {
        Role::Manager | Role::Admin => (Route::ManagerTickets, TicketScope::All),
        Role::Resolver => (Route::ResolverTickets, TicketScope::Assigned),
        Role::User | Role::Unknown => (Route::RequesterTickets, TicketScope::Mine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, is_system_admin: bool) -> User {
        User {
            id: "u-1".into(),
            name: "Test".into(),
            email: "test@example.com".into(),
            role,
            is_system_admin,
            is_active: true,
        }
    }

    #[test]
    fn sections_follow_role() {
        assert_eq!(
            ticket_section(&user(Role::Manager, false)),
            (Route::ManagerTickets, TicketScope::All)
        );
        assert_eq!(
            ticket_section(&user(Role::Resolver, false)),
            (Route::ResolverTickets, TicketScope::Assigned)
        );
        assert_eq!(
            ticket_section(&user(Role::User, false)),
            (Route::RequesterTickets, TicketScope::Mine)
        );
    }

    #[test]
    fn every_role_can_enter_its_ticket_section() {
        for role in [Role::Admin, Role::Manager, Role::Resolver, Role::User] {
            let account = user(role, false);
            let (route, _) = ticket_section(&account);
            assert!(require_route(&account, route).is_ok(), "{role}");
        }
        assert_eq!(
            ticket_section(&user(Role::Admin, false)),
            (Route::ManagerTickets, TicketScope::All)
        );
    }

    #[test]
    fn system_admin_sees_everything() {
        assert_eq!(
            ticket_section(&user(Role::Resolver, true)),
            (Route::ManagerTickets, TicketScope::All)
        );
    }

    #[test]
    fn guard_names_home_route() {
        let err = require_route(&user(Role::Resolver, false), Route::AdminUsers)
            .expect_err("resolver must not enter admin");
        assert_eq!(
            err.to_string(),
            "Resolver accounts cannot open /admin/users (your home is /resolver/tickets)"
        );
    }

    #[test]
    fn unknown_role_is_kept_out_of_ticket_sections() {
        let stranger = user(Role::Unknown, false);
        let (route, _) = ticket_section(&stranger);
        assert!(require_route(&stranger, route).is_err());
        assert!(require_route(&stranger, Route::Dashboard).is_ok());
    }
}
