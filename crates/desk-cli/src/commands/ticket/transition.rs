use desk_core::entities::Ticket;
use desk_core::enums::{Priority, TicketType};
use desk_core::workflow::{TicketAction, ensure_action_available};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

use super::TicketDetail;

/// A workflow transition with its arguments.
#[derive(Debug, Clone, Copy)]
pub enum Transition<'a> {
    Classify {
        ticket_type: TicketType,
        priority: Priority,
    },
    Assign {
        resolver: &'a str,
    },
    Resolve {
        note: Option<&'a str>,
    },
    Verify,
    Close,
}

impl Transition<'_> {
    pub const fn action(self) -> TicketAction {
        match self {
            Self::Classify { .. } => TicketAction::Reclassify,
            Self::Assign { .. } => TicketAction::Assign,
            Self::Resolve { .. } => TicketAction::Resolve,
            Self::Verify => TicketAction::Verify,
            Self::Close => TicketAction::Close,
        }
    }
}

/// Fetch the ticket, check the action is offered, then call the endpoint.
pub async fn run(
    id: &str,
    transition: Transition<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ticket = ctx.api.get_ticket(id).await?;
    ensure_action_available(&ticket, &ctx.user, transition.action())?;

    let updated = with_spinner(
        &format!("Applying {}…", transition.action()),
        apply(ctx, &ticket, transition),
    )
    .await?;
    tracing::debug!(id, status = %updated.status, "transition applied");
    output(&TicketDetail::new(updated, &ctx.user), flags.format)
}

async fn apply(
    ctx: &AppContext,
    ticket: &Ticket,
    transition: Transition<'_>,
) -> Result<Ticket, desk_api::ApiError> {
    let id = ticket.id.as_str();
    match transition {
        Transition::Classify {
            ticket_type,
            priority,
        } => ctx.api.classify_ticket(id, ticket_type, priority).await,
        Transition::Assign { resolver } => ctx.api.assign_ticket(id, resolver).await,
        Transition::Resolve { note } => ctx.api.resolve_ticket(id, note).await,
        Transition::Verify => ctx.api.verify_ticket(id).await,
        Transition::Close => ctx.api.close_ticket(id).await,
    }
}
