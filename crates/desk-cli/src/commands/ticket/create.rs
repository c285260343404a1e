use desk_api::tickets::NewTicket;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ticket::TicketCreateArgs;
use crate::commands::shared::guard::{require_route, ticket_section};
use crate::commands::shared::parse::parse_optional_tag;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

use super::TicketDetail;

pub async fn run(
    args: &TicketCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (route, _) = ticket_section(&ctx.user);
    require_route(&ctx.user, route)?;

    let title = args.title.trim();
    if title.is_empty() {
        anyhow::bail!("ticket title must not be empty");
    }
    let project_id = match &args.project {
        Some(project) => Some(project.clone()),
        None => ctx.access().await.active_project(),
    };

    let new_ticket = NewTicket {
        title: title.to_string(),
        description: args.description.clone(),
        ticket_type: parse_optional_tag(args.ticket_type.as_deref())?,
        priority: parse_optional_tag(args.priority.as_deref())?,
        project_id,
    };
    let ticket = with_spinner("Creating ticket…", ctx.api.create_ticket(&new_ticket)).await?;
    tracing::debug!(id = %ticket.id, "ticket created");
    output(&TicketDetail::new(ticket, &ctx.user), flags.format)
}
