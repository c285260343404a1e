//! Cross-cutting error types for Ticketdesk.
//!
//! Transport and storage errors (`ApiError`, `SessionError`) live in their
//! respective crates. `desk-cli` folds all of them into `anyhow`.

use thiserror::Error;

use crate::enums::{Role, TicketStatus};
use crate::workflow::TicketAction;

/// Errors raised by the domain model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The workflow table does not expose this action for the status/role pair.
    #[error("Action '{action}' is not available on ticket {id} ({status}) for role {role}")]
    ActionUnavailable {
        id: String,
        action: TicketAction,
        status: TicketStatus,
        role: Role,
    },

    /// Data failed validation (format, constraints, unknown tag).
    #[error("Validation error: {0}")]
    Validation(String),
}
