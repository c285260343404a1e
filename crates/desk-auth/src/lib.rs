//! # desk-auth
//!
//! Client-side session persistence for Ticketdesk.
//!
//! Keeps the access token (OS keychain via `keyring`, or the session file),
//! the refresh token, and the cached user profile, each with its own expiry.
//! Also persists the active organization/project selection through the
//! [`ContextStore`] trait.
//!
//! Token expiry is not validated here; the API rejects expired tokens and the
//! caller re-authenticates. [`expiry::decode_expiry`] exists for display only.

pub mod context_store;
pub mod error;
pub mod expiry;
pub mod session;
mod token_store;

pub use context_store::{ContextStore, MemoryContextStore};
pub use error::SessionError;
pub use session::{SessionStore, SessionTtl, TokenSource};
