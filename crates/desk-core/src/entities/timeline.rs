use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserSummary;
use crate::enums::TicketStatus;

/// One entry of a ticket's history (creation, classification, transitions, comments).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub ticket_id: String,
    pub action: String,
    #[serde(default)]
    pub from_status: Option<TicketStatus>,
    #[serde(default)]
    pub to_status: Option<TicketStatus>,
    #[serde(default)]
    pub actor: Option<UserSummary>,
    pub created_at: DateTime<Utc>,
}
