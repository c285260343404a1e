use desk_auth::TokenSource;
use desk_auth::expiry::{decode_expiry, is_expired};
use desk_config::DeskConfig;
use desk_core::enums::Role;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::open_session;
use crate::output::output;

#[derive(Serialize, Default)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<String>,
    email: Option<String>,
    role: Option<Role>,
    token_source: Option<TokenSource>,
    expires_at: Option<String>,
    expired: Option<bool>,
    session_dir: String,
    note: Option<String>,
}

pub fn handle(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<()> {
    let session = open_session(config)?;
    let mut status = AuthStatusResponse {
        session_dir: session.dir().display().to_string(),
        ..AuthStatusResponse::default()
    };

    match (session.resolve_token(), session.user()) {
        (Some((token, source)), Some(user)) => {
            status.authenticated = true;
            status.user = Some(user.name);
            status.email = Some(user.email);
            status.role = Some(user.role);
            status.token_source = Some(source);
            match decode_expiry(&token) {
                Ok(expires_at) => {
                    status.expires_at = Some(expires_at.to_rfc3339());
                    status.expired = Some(is_expired(&token));
                }
                Err(error) => status.note = Some(format!("expiry unknown: {error}")),
            }
        }
        (Some(_), None) => status.note = Some("cached profile missing or expired".into()),
        (None, _) => status.note = Some("no token found".into()),
    }

    output(&status, flags.format)
}
