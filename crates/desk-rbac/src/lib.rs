//! # desk-rbac
//!
//! Client-side role/permission context for Ticketdesk.
//!
//! Tracks which organizations and projects the signed-in user can see, which
//! pair is active, and the permission strings granted in that pair. The
//! active pair is persisted through [`desk_auth::ContextStore`] so it
//! survives between runs.
//!
//! The server remains the authority: everything here only decides what the
//! client offers to do.

pub mod context;
pub mod error;
pub mod selection;
pub mod source;

pub use context::{LoadOutcome, Phase, RbacContext, RbacState};
pub use error::RbacError;
pub use selection::{Selection, auto_select};
pub use source::AccessSource;
