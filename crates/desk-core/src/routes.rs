//! Role-segmented sections of the application.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::User;
use crate::enums::Role;

/// A section of the application and the roles allowed into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Login,
    AdminUsers,
    ManagerTickets,
    ResolverTickets,
    RequesterTickets,
    Organizations,
    Projects,
    Dashboard,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/auth/login",
            Self::AdminUsers => "/admin/users",
            Self::ManagerTickets => "/manager/tickets",
            Self::ResolverTickets => "/resolver/tickets",
            Self::RequesterTickets => "/user/tickets",
            Self::Organizations => "/organizations",
            Self::Projects => "/projects",
            Self::Dashboard => "/dashboard",
        }
    }

    /// Where a user lands after signing in.
    #[must_use]
    pub const fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminUsers,
            Role::Manager => Self::ManagerTickets,
            Role::Resolver => Self::ResolverTickets,
            Role::User => Self::RequesterTickets,
            Role::Unknown => Self::Dashboard,
        }
    }

    /// Whether `user` may enter this section.
    ///
    /// System admins may enter every section. Fine-grained permission checks
    /// still apply to individual operations inside a section.
    #[must_use]
    pub fn allows(self, user: &User) -> bool {
        if user.is_system_admin {
            return true;
        }
        match self {
            Self::Login | Self::Dashboard => true,
            Self::AdminUsers => user.role == Role::Admin,
            Self::ManagerTickets | Self::Organizations | Self::Projects => {
                matches!(user.role, Role::Admin | Role::Manager)
            }
            Self::ResolverTickets => user.role == Role::Resolver,
            Self::RequesterTickets => user.role == Role::User,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
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
    fn manager_lands_on_manager_tickets() {
        assert_eq!(Route::home_for(Role::Manager).path(), "/manager/tickets");
        assert_eq!(Route::home_for(Role::User).path(), "/user/tickets");
    }

    #[test]
    fn sections_are_role_segmented() {
        assert!(Route::ManagerTickets.allows(&user(Role::Manager, false)));
        assert!(Route::ManagerTickets.allows(&user(Role::Admin, false)));
        assert!(!Route::ManagerTickets.allows(&user(Role::Resolver, false)));
        assert!(!Route::AdminUsers.allows(&user(Role::Manager, false)));
        assert!(Route::Dashboard.allows(&user(Role::Unknown, false)));
    }

    #[test]
    fn system_admin_enters_everywhere() {
        let admin = user(Role::User, true);
        assert!(Route::AdminUsers.allows(&admin));
        assert!(Route::ResolverTickets.allows(&admin));
    }

    #[test]
    fn home_route_is_always_enterable() {
        for role in Role::ALL {
            assert!(Route::home_for(role).allows(&user(role, false)), "{role}");
        }
    }
}
