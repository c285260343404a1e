use clap::Subcommand;

/// Active organization/project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContextCommands {
    /// Show available and active organizations/projects.
    Show,
    /// Make an organization active (clears the active project).
    SwitchOrg {
        /// Organization ID.
        id: String,
    },
    /// Make a project of the active organization active.
    SwitchProject {
        /// Project ID.
        id: String,
    },
    /// List permissions granted in the active context.
    Permissions,
    /// Check a single permission (exit status 1 when denied).
    Can {
        /// Permission string, e.g. `ticket.assign`.
        permission: String,
    },
}
