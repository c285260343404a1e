use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserSummary;
use crate::enums::{Priority, TicketStatus, TicketType};

/// A support ticket. Exactly one per issue; `resolver` is empty until assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TicketStatus,
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,
    #[serde(default)]
    pub priority: Option<Priority>,
    pub created_by: UserSummary,
    #[serde(default)]
    pub resolver: Option<UserSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// A ticket is classified once a manager has set both type and priority.
    #[must_use]
    pub const fn is_classified(&self) -> bool {
        self.ticket_type.is_some() && self.priority.is_some()
    }

    #[must_use]
    pub fn is_created_by(&self, user_id: &str) -> bool {
        self.created_by.id == user_id
    }
}
