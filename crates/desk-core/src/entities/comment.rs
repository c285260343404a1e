use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::UserSummary;

/// A comment on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub ticket_id: String,
    pub author: UserSummary,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
