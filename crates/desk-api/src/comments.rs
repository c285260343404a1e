//! Ticket comments.

use desk_core::entities::Comment;
use serde_json::json;

use crate::{ApiClient, ApiError, Listing, RequestOptions, segment};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_comments(&self, ticket_id: &str) -> Result<Vec<Comment>, ApiError> {
        let path = format!("/comments/ticket/{}", segment(ticket_id));
        let listing: Listing<Comment> = self.request(&path, RequestOptions::get()).await?;
        Ok(listing.into_vec())
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn add_comment(&self, ticket_id: &str, content: &str) -> Result<Comment, ApiError> {
        self.request(
            "/comments",
            RequestOptions::post(json!({ "ticketId": ticket_id, "content": content })),
        )
        .await
    }
}
