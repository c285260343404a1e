use desk_core::entities::Ticket;
use desk_core::enums::{Priority, TicketStatus, TicketType};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::guard::{require_route, ticket_section};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_optional_tag;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct TicketRow {
    id: String,
    title: String,
    status: TicketStatus,
    #[serde(rename = "type")]
    ticket_type: Option<TicketType>,
    priority: Option<Priority>,
    resolver: Option<String>,
    created: String,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status,
            ticket_type: ticket.ticket_type,
            priority: ticket.priority,
            resolver: ticket.resolver.as_ref().map(|r| r.display_name().to_string()),
            created: ticket.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

pub async fn run(
    status: Option<&str>,
    project: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (route, scope) = ticket_section(&ctx.user);
    require_route(&ctx.user, route)?;

    let status = parse_optional_tag::<TicketStatus>(status)?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let project = match project {
        Some(project) => Some(project.to_string()),
        None => ctx.access().await.active_project(),
    };

    let mut tickets = with_spinner(
        "Loading tickets…",
        ctx.api.list_tickets(scope, project.as_deref()),
    )
    .await?;
    if let Some(status) = status {
        tickets.retain(|ticket| ticket.status == status);
    }
    tickets.truncate(limit);

    let rows: Vec<TicketRow> = tickets.iter().map(TicketRow::from).collect();
    output(&rows, flags.format)
}
