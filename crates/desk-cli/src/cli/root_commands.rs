use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, CommentCommands, ContextCommands, OrgCommands, ProjectCommands,
    TicketCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, and inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Active organization/project and permissions.
    Context {
        #[command(subcommand)]
        action: ContextCommands,
    },
    /// Tickets and workflow actions.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Ticket comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// History of a ticket.
    Timeline {
        /// Ticket ID.
        id: String,
    },
    /// User administration.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Organizations.
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Analytics dashboard for your scope.
    Dashboard,
}
