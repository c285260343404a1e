use anyhow::Context;
use desk_auth::expiry::decode_expiry;
use desk_config::DeskConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::{api_client, open_session};
use crate::output::output;
use crate::progress::with_spinner;

#[derive(Serialize)]
struct AuthRefreshResponse {
    refreshed: bool,
    rotated_refresh_token: bool,
    expires_at: Option<String>,
}

pub async fn handle(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<()> {
    let session = open_session(config)?;
    let refresh_token = session
        .refresh_token()
        .context("no refresh token stored: run `desk auth login`")?;

    let api = api_client(config)?;
    let pair = with_spinner("Refreshing session…", api.refresh(&refresh_token)).await?;
    session.update_tokens(&pair.access_token, pair.refresh_token.as_deref())?;

    output(
        &AuthRefreshResponse {
            refreshed: true,
            rotated_refresh_token: pair.refresh_token.is_some(),
            expires_at: decode_expiry(&pair.access_token)
                .ok()
                .map(|at| at.to_rfc3339()),
        },
        flags.format,
    )
}
