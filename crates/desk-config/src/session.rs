//! Local session storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_use_keyring() -> bool {
    true
}

const fn default_token_ttl_hours() -> u64 {
    24
}

const fn default_refresh_ttl_days() -> u64 {
    7
}

const fn default_profile_ttl_days() -> u64 {
    7
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory holding `session.json` and `context.json`.
    /// Empty means `~/.ticketdesk`.
    #[serde(default)]
    pub dir: String,

    /// Keep the access token in the OS keychain instead of the session file.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,

    /// How long a stored access token is kept.
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: u64,

    /// How long a stored refresh token is kept.
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: u64,

    /// How long the cached user profile is kept.
    #[serde(default = "default_profile_ttl_days")]
    pub profile_ttl_days: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            use_keyring: default_use_keyring(),
            token_ttl_hours: default_token_ttl_hours(),
            refresh_ttl_days: default_refresh_ttl_days(),
            profile_ttl_days: default_profile_ttl_days(),
        }
    }
}

impl SessionConfig {
    /// Resolve the session directory, defaulting to `~/.ticketdesk`.
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            dirs::home_dir().map(|home| home.join(".ticketdesk"))
        } else {
            Some(PathBuf::from(self.dir.trim()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SessionConfig::default();
        assert!(config.use_keyring);
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.refresh_ttl_days, 7);
        assert_eq!(config.profile_ttl_days, 7);
    }

    #[test]
    fn explicit_dir_wins() {
        let config = SessionConfig {
            dir: "/tmp/desk-session".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_dir(),
            Some(PathBuf::from("/tmp/desk-session"))
        );
    }
}
