use clap::Subcommand;

/// Ticket comment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// List comments on a ticket.
    List {
        /// Ticket ID.
        ticket: String,
    },
    /// Add a comment to a ticket.
    Add {
        /// Ticket ID.
        ticket: String,
        /// Comment text.
        content: String,
    },
}
