//! Ticket listing, creation, and workflow transitions.
//!
//! Transition endpoints are called as-is; whether a transition is legal is
//! decided by the server. Callers gate on
//! [`desk_core::workflow::available_actions`] first.

use desk_core::entities::Ticket;
use desk_core::enums::{Priority, Role, TicketType};
use desk_core::workflow::TicketAction;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ApiClient, ApiError, Listing, RequestOptions, segment};

/// Which tickets a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketScope {
    /// Everything visible in the active context (managers, admins).
    All,
    /// Tickets assigned to the caller.
    Assigned,
    /// Tickets the caller created.
    Mine,
}

impl TicketScope {
    /// The listing a role sees by default.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin | Role::Manager => Self::All,
            Role::Resolver => Self::Assigned,
            Role::User | Role::Unknown => Self::Mine,
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::All => "/tickets",
            Self::Assigned => "/tickets/assigned",
            Self::Mine => "/tickets/my",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<TicketType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_tickets(
        &self,
        scope: TicketScope,
        project_id: Option<&str>,
    ) -> Result<Vec<Ticket>, ApiError> {
        let path = project_id.map_or_else(
            || scope.path().to_string(),
            |id| format!("{}?projectId={}", scope.path(), urlencoding::encode(id)),
        );
        let listing: Listing<Ticket> = self.request(&path, RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails (404 for unknown ids).
    pub async fn get_ticket(&self, id: &str) -> Result<Ticket, ApiError> {
        self.request(&format!("/tickets/{}", segment(id)), RequestOptions::get())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, ApiError> {
        let body = serde_json::to_value(ticket).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.request("/tickets", RequestOptions::post(body)).await
    }

    /// Set type and priority.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn classify_ticket(
        &self,
        id: &str,
        ticket_type: TicketType,
        priority: Priority,
    ) -> Result<Ticket, ApiError> {
        self.transition(
            id,
            TicketAction::Reclassify,
            Some(json!({ "type": ticket_type, "priority": priority })),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn assign_ticket(&self, id: &str, resolver_id: &str) -> Result<Ticket, ApiError> {
        self.transition(
            id,
            TicketAction::Assign,
            Some(json!({ "resolverId": resolver_id })),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn resolve_ticket(&self, id: &str, note: Option<&str>) -> Result<Ticket, ApiError> {
        let body = note.map(|note| json!({ "resolutionNote": note }));
        self.transition(id, TicketAction::Resolve, body).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn verify_ticket(&self, id: &str) -> Result<Ticket, ApiError> {
        self.transition(id, TicketAction::Verify, None).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn close_ticket(&self, id: &str) -> Result<Ticket, ApiError> {
        self.transition(id, TicketAction::Close, None).await
    }

    async fn transition(
        &self,
        id: &str,
        action: TicketAction,
        body: Option<serde_json::Value>,
    ) -> Result<Ticket, ApiError> {
        self.request(
            &transition_path(id, action),
            RequestOptions::patch(body),
        )
        .await
    }
}

fn transition_path(id: &str, action: TicketAction) -> String {
    let verb = match action {
        TicketAction::Reclassify => "classify",
        TicketAction::Assign => "assign",
        TicketAction::Resolve => "resolve",
        TicketAction::Verify => "verify",
        TicketAction::Close => "close",
    };
    format!("/tickets/{}/{verb}", segment(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_follows_role() {
        assert_eq!(TicketScope::for_role(Role::Manager), TicketScope::All);
        assert_eq!(TicketScope::for_role(Role::Resolver), TicketScope::Assigned);
        assert_eq!(TicketScope::for_role(Role::User), TicketScope::Mine);
    }

    #[test]
    fn transition_paths() {
        assert_eq!(
            transition_path("tkt-1", TicketAction::Reclassify),
            "/tickets/tkt-1/classify"
        );
        assert_eq!(transition_path("tkt-1", TicketAction::Close), "/tickets/tkt-1/close");
    }

    #[test]
    fn new_ticket_omits_unset_classification() {
        let body = serde_json::to_value(NewTicket {
            title: "Printer jam".into(),
            description: String::new(),
            ticket_type: None,
            priority: Some(Priority::Low),
            project_id: None,
        })
        .expect("serialize");
        assert!(body.get("type").is_none());
        assert_eq!(body["priority"], "LOW");
    }
}
