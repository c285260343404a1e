pub mod admin;
pub mod auth;
pub mod comment;
pub mod context;
pub mod ticket;

pub use admin::{OrgCommands, ProjectCommands, UserCommands};
pub use auth::AuthCommands;
pub use comment::CommentCommands;
pub use context::ContextCommands;
pub use ticket::TicketCommands;
