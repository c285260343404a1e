use clap::{Args, Subcommand};

/// User administration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List users.
    List {
        /// Only users with this role.
        #[arg(long)]
        role: Option<String>,
    },
    /// Create a user.
    Create(UserCreateArgs),
    /// Change a user's role.
    SetRole {
        /// User ID.
        id: String,
        /// USER, MANAGER, RESOLVER, or ADMIN.
        role: String,
    },
    /// Re-enable a disabled account.
    Enable {
        /// User ID.
        id: String,
    },
    /// Disable an account.
    Disable {
        /// User ID.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Initial password (read from DESK_NEW_USER_PASSWORD when omitted).
    #[arg(long)]
    pub password: Option<String>,
    /// USER, MANAGER, RESOLVER, or ADMIN.
    #[arg(long, default_value = "USER")]
    pub role: String,
}

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// List organizations.
    List,
    /// Create an organization.
    Create {
        /// Display name.
        name: String,
        /// URL slug.
        #[arg(long)]
        slug: Option<String>,
    },
}

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects of the active (or given) organization.
    List {
        /// Organization ID.
        #[arg(long)]
        org: Option<String>,
    },
    /// Create a project in the active (or given) organization.
    Create {
        /// Display name.
        name: String,
        /// Organization ID.
        #[arg(long)]
        org: Option<String>,
        /// URL slug.
        #[arg(long)]
        slug: Option<String>,
    },
}
