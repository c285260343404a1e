use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in with email and password.
    Login(AuthLoginArgs),
    /// Clear stored credentials and context.
    Logout,
    /// Show current auth status.
    Status,
    /// Exchange the stored refresh token for a new access token.
    Refresh,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,
    /// Password (read from DESK_PASSWORD when omitted).
    #[arg(long)]
    pub password: Option<String>,
}
