mod actions;
mod create;
mod get;
mod list;
mod transition;

use desk_core::entities::{Ticket, User};
use desk_core::enums::{Priority, TicketStatus, TicketType};
use desk_core::workflow::{TicketAction, available_actions};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::commands::shared::parse::parse_tag;
use crate::context::AppContext;

use self::transition::Transition;

/// Handle `desk ticket`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::List {
            status,
            project,
            limit,
        } => list::run(status.as_deref(), project.as_deref(), *limit, ctx, flags).await,
        TicketCommands::Get { id } => get::run(id, ctx, flags).await,
        TicketCommands::Create(args) => create::run(args, ctx, flags).await,
        TicketCommands::Classify {
            id,
            ticket_type,
            priority,
        } => {
            let transition = Transition::Classify {
                ticket_type: parse_tag(ticket_type)?,
                priority: parse_tag(priority)?,
            };
            transition::run(id, transition, ctx, flags).await
        }
        TicketCommands::Assign { id, resolver } => {
            let resolver = resolver.as_str();
            transition::run(id, Transition::Assign { resolver }, ctx, flags).await
        }
        TicketCommands::Resolve { id, note } => {
            let note = note.as_deref();
            transition::run(id, Transition::Resolve { note }, ctx, flags).await
        }
        TicketCommands::Verify { id } => transition::run(id, Transition::Verify, ctx, flags).await,
        TicketCommands::Close { id } => transition::run(id, Transition::Close, ctx, flags).await,
        TicketCommands::Actions { id } => actions::run(id, ctx, flags).await,
    }
}

/// A ticket as shown by `get`, `create`, and the transition commands.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketDetail {
    id: String,
    title: String,
    status: TicketStatus,
    #[serde(rename = "type")]
    ticket_type: Option<TicketType>,
    priority: Option<Priority>,
    project_id: Option<String>,
    created_by: String,
    resolver: Option<String>,
    created_at: String,
    description: String,
    /// Workflow actions the viewer may take next.
    actions: Vec<TicketAction>,
}

impl TicketDetail {
    fn new(ticket: Ticket, viewer: &User) -> Self {
        let actions = available_actions(&ticket, viewer);
        Self {
            created_by: ticket.created_by.display_name().to_string(),
            resolver: ticket.resolver.as_ref().map(|r| r.display_name().to_string()),
            created_at: ticket.created_at.format("%Y-%m-%d %H:%M").to_string(),
            id: ticket.id,
            title: ticket.title,
            status: ticket.status,
            ticket_type: ticket.ticket_type,
            priority: ticket.priority,
            project_id: ticket.project_id,
            description: ticket.description,
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use desk_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn detail_lists_viewer_actions() {
        let ticket: Ticket = serde_json::from_str(
            r#"{
                "id": "tkt-3",
                "title": "Printer jam",
                "status": "OPEN",
                "type": "SUPPORT",
                "priority": "LOW",
                "createdBy": { "id": "u-req" },
                "createdAt": "2026-03-02T09:15:00Z"
            }"#,
        )
        .expect("ticket should parse");
        let manager = User {
            id: "u-mgr".into(),
            name: "Morgan".into(),
            email: "morgan@example.com".into(),
            role: Role::Manager,
            is_system_admin: false,
            is_active: true,
        };

        let detail = TicketDetail::new(ticket, &manager);
        assert_eq!(detail.created_by, "u-req");
        assert_eq!(detail.created_at, "2026-03-02 09:15");
        assert_eq!(
            detail.actions,
            vec![TicketAction::Reclassify, TicketAction::Assign]
        );

        let json = serde_json::to_value(&detail).expect("serialize");
        assert_eq!(json["type"], "SUPPORT");
        assert_eq!(json["actions"], serde_json::json!(["reclassify", "assign"]));
    }
}
