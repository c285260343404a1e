use desk_core::enums::TicketStatus;
use desk_core::workflow::{TicketAction, available_actions};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ActionRow {
    action: TicketAction,
    moves_to: Option<TicketStatus>,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = ctx.api.get_ticket(id).await?;
    let rows: Vec<ActionRow> = available_actions(&ticket, &ctx.user)
        .into_iter()
        .map(|action| ActionRow {
            action,
            moves_to: action.target_status(),
        })
        .collect();
    output(&rows, flags.format)
}
