use clap::{Args, Subcommand};

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// List tickets visible to your role.
    List {
        /// Filter by status.
        #[arg(long)]
        status: Option<String>,
        /// Use this project instead of the active one.
        #[arg(long)]
        project: Option<String>,
        /// Max results.
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one ticket with the actions available to you.
    Get {
        /// Ticket ID.
        id: String,
    },
    /// Open a new ticket.
    Create(TicketCreateArgs),
    /// Set type and priority (managers).
    Classify {
        /// Ticket ID.
        id: String,
        /// BUG, FEATURE, SUPPORT, or INCIDENT.
        #[arg(long = "type")]
        ticket_type: String,
        /// LOW, MEDIUM, HIGH, or CRITICAL.
        #[arg(long)]
        priority: String,
    },
    /// Assign to a resolver (managers, classified tickets only).
    Assign {
        /// Ticket ID.
        id: String,
        /// Resolver user ID.
        #[arg(long)]
        resolver: String,
    },
    /// Mark as resolved (assigned resolver).
    Resolve {
        /// Ticket ID.
        id: String,
        /// Resolution note.
        #[arg(long)]
        note: Option<String>,
    },
    /// Confirm the resolution (ticket creator).
    Verify {
        /// Ticket ID.
        id: String,
    },
    /// Close a verified ticket (managers).
    Close {
        /// Ticket ID.
        id: String,
    },
    /// List the workflow actions you can take on a ticket.
    Actions {
        /// Ticket ID.
        id: String,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TicketCreateArgs {
    /// Short summary.
    #[arg(long)]
    pub title: String,
    /// Details.
    #[arg(long, default_value = "")]
    pub description: String,
    /// BUG, FEATURE, SUPPORT, or INCIDENT.
    #[arg(long = "type")]
    pub ticket_type: Option<String>,
    /// LOW, MEDIUM, HIGH, or CRITICAL.
    #[arg(long)]
    pub priority: Option<String>,
    /// Project ID (defaults to the active project).
    #[arg(long)]
    pub project: Option<String>,
}
