//! Ticket history.

use desk_core::entities::TimelineEvent;

use crate::{ApiClient, ApiError, Listing, RequestOptions, segment};

impl ApiClient {
    /// Events for one ticket, oldest first as returned by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn ticket_timeline(&self, ticket_id: &str) -> Result<Vec<TimelineEvent>, ApiError> {
        let path = format!("/timeline/ticket/{}", segment(ticket_id));
        let listing: Listing<TimelineEvent> = self.request(&path, RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }
}
