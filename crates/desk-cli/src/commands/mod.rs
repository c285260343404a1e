pub mod admin;
pub mod auth;
pub mod comment;
pub mod context;
pub mod dashboard;
pub mod dispatch;
pub mod shared;
pub mod ticket;
