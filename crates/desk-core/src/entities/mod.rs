//! Entity structs for Ticketdesk domain objects.
//!
//! Authoritative definitions live in the ticketing API; these are the shapes
//! the client consumes. Field names are `camelCase` on the wire.

mod comment;
mod organization;
mod project;
mod ticket;
mod timeline;
mod user;

pub use comment::Comment;
pub use organization::Organization;
pub use project::Project;
pub use ticket::Ticket;
pub use timeline::TimelineEvent;
pub use user::{User, UserSummary};
