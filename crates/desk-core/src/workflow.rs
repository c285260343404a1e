//! Ticket workflow action gating.
//!
//! Which actions a user is offered is a fixed table over the ticket's status
//! and the acting user's role:
//!
//! | Status             | Role                      | Action                     |
//! |--------------------|---------------------------|----------------------------|
//! | OPEN or ASSIGNED   | MANAGER                   | reclassify                 |
//! | OPEN               | MANAGER                   | assign (once classified)   |
//! | ASSIGNED           | RESOLVER                  | resolve                    |
//! | RESOLVED           | USER who created it       | verify                     |
//! | VERIFIED           | MANAGER                   | close                      |
//!
//! No other combination exposes anything. The API decides whether a
//! transition is legal; this table only decides what the client offers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::{Ticket, User};
use crate::enums::{Role, TicketStatus};
use crate::errors::CoreError;

/// An action the client may offer on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketAction {
    Reclassify,
    Assign,
    Resolve,
    Verify,
    Close,
}

impl TicketAction {
    /// Status the ticket moves to when the action succeeds.
    ///
    /// Reclassification does not change status.
    #[must_use]
    pub const fn target_status(self) -> Option<TicketStatus> {
        match self {
            Self::Reclassify => None,
            Self::Assign => Some(TicketStatus::Assigned),
            Self::Resolve => Some(TicketStatus::Resolved),
            Self::Verify => Some(TicketStatus::Verified),
            Self::Close => Some(TicketStatus::Closed),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reclassify => "reclassify",
            Self::Assign => "assign",
            Self::Resolve => "resolve",
            Self::Verify => "verify",
            Self::Close => "close",
        }
    }
}

impl fmt::Display for TicketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The facts the action table looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateInput {
    pub status: TicketStatus,
    pub role: Role,
    /// The acting user created the ticket.
    pub is_creator: bool,
    /// Type and priority are both set.
    pub is_classified: bool,
}

impl GateInput {
    #[must_use]
    pub fn new(ticket: &Ticket, actor: &User) -> Self {
        Self {
            status: ticket.status,
            role: actor.role,
            is_creator: ticket.is_created_by(&actor.id),
            is_classified: ticket.is_classified(),
        }
    }
}

/// Evaluate the action table. Results are in [`TicketAction`] order.
#[must_use]
pub fn actions_for(input: GateInput) -> Vec<TicketAction> {
    use TicketStatus as S;

    let mut actions = Vec::new();
    match (input.role, input.status) {
        (Role::Manager, S::Open) => {
            actions.push(TicketAction::Reclassify);
            if input.is_classified {
                actions.push(TicketAction::Assign);
            }
        }
        (Role::Manager, S::Assigned) => actions.push(TicketAction::Reclassify),
        (Role::Manager, S::Verified) => actions.push(TicketAction::Close),
        (Role::Resolver, S::Assigned) => actions.push(TicketAction::Resolve),
        (Role::User, S::Resolved) if input.is_creator => actions.push(TicketAction::Verify),
        _ => {}
    }
    actions
}

/// Actions `actor` is offered on `ticket`.
#[must_use]
pub fn available_actions(ticket: &Ticket, actor: &User) -> Vec<TicketAction> {
    actions_for(GateInput::new(ticket, actor))
}

/// Fail with [`CoreError::ActionUnavailable`] unless `action` is offered.
///
/// # Errors
///
/// Returns `CoreError::ActionUnavailable` when the table does not list the
/// action for this status/role pair.
pub fn ensure_action_available(
    ticket: &Ticket,
    actor: &User,
    action: TicketAction,
) -> Result<(), CoreError> {
    if available_actions(ticket, actor).contains(&action) {
        return Ok(());
    }
    Err(CoreError::ActionUnavailable {
        id: ticket.id.clone(),
        action,
        status: ticket.status,
        role: actor.role,
    })
}
