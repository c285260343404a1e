use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

use super::TicketDetail;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = with_spinner("Loading ticket…", ctx.api.get_ticket(id)).await?;
    output(&TicketDetail::new(ticket, &ctx.user), flags.format)
}
