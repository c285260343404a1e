use desk_config::DeskConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::open_session;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags, config: &DeskConfig) -> anyhow::Result<()> {
    open_session(config)?.clear()?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
