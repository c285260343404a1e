use desk_core::entities::{Comment, TimelineEvent};
use desk_core::enums::TicketStatus;
use desk_core::permissions::known;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CommentCommands;
use crate::commands::shared::guard::require_permission;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Debug, Serialize)]
struct CommentRow {
    id: String,
    author: String,
    at: String,
    content: String,
}

impl From<&Comment> for CommentRow {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            author: comment.author.display_name().to_string(),
            at: comment.created_at.format("%Y-%m-%d %H:%M").to_string(),
            content: comment.content.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TimelineRow {
    at: String,
    action: String,
    from: Option<TicketStatus>,
    to: Option<TicketStatus>,
    actor: Option<String>,
}

impl From<&TimelineEvent> for TimelineRow {
    fn from(event: &TimelineEvent) -> Self {
        Self {
            at: event.created_at.format("%Y-%m-%d %H:%M").to_string(),
            action: event.action.clone(),
            from: event.from_status,
            to: event.to_status,
            actor: event.actor.as_ref().map(|a| a.display_name().to_string()),
        }
    }
}

/// Handle `desk comment`.
pub async fn handle(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::List { ticket } => {
            let comments =
                with_spinner("Loading comments…", ctx.api.list_comments(ticket)).await?;
            let rows: Vec<CommentRow> = comments.iter().map(CommentRow::from).collect();
            output(&rows, flags.format)
        }
        CommentCommands::Add { ticket, content } => {
            let content = content.trim();
            if content.is_empty() {
                anyhow::bail!("comment must not be empty");
            }
            require_permission(ctx, known::COMMENT_CREATE).await?;
            let comment = ctx.api.add_comment(ticket, content).await?;
            output(&CommentRow::from(&comment), flags.format)
        }
    }
}

/// Handle `desk timeline <id>`: events oldest first.
pub async fn timeline(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut events = with_spinner("Loading timeline…", ctx.api.ticket_timeline(id)).await?;
    events.sort_by_key(|event| event.created_at);
    let rows: Vec<TimelineRow> = events.iter().map(TimelineRow::from).collect();
    output(&rows, flags.format)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn timeline_row_flattens_actor_and_statuses() {
        let event: TimelineEvent = serde_json::from_str(
            r#"{
                "id": "ev-1",
                "ticketId": "tkt-1",
                "action": "STATUS_CHANGED",
                "fromStatus": "OPEN",
                "toStatus": "ASSIGNED",
                "actor": { "id": "u-mgr", "name": "Morgan" },
                "createdAt": "2026-03-03T10:00:00Z"
            }"#,
        )
        .expect("event should parse");
        let row = serde_json::to_value(TimelineRow::from(&event)).expect("serialize");
        assert_eq!(
            row,
            serde_json::json!({
                "at": "2026-03-03 10:00",
                "action": "STATUS_CHANGED",
                "from": "OPEN",
                "to": "ASSIGNED",
                "actor": "Morgan"
            })
        );
    }
}
