//! File-backed session store.
//!
//! Layout inside the session directory:
//! - `session.json`: access token (or its expiry only, when the token lives in
//!   the keyring), refresh token, and the serialized user profile. Every entry
//!   carries its own `expiresAt`; expired entries read as absent.
//! - `context.json`: active organization and project ids.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};
use desk_core::entities::User;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::token_store;

const SESSION_FILE: &str = "session.json";
pub(crate) const CONTEXT_FILE: &str = "context.json";
const TOKEN_ENV: &str = "DESK_AUTH__TOKEN";

/// How long each stored value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTtl {
    pub token: TimeDelta,
    pub refresh_token: TimeDelta,
    pub profile: TimeDelta,
}

impl Default for SessionTtl {
    fn default() -> Self {
        Self {
            token: TimeDelta::days(1),
            refresh_token: TimeDelta::days(7),
            profile: TimeDelta::days(7),
        }
    }
}

impl SessionTtl {
    #[must_use]
    pub fn new(token_hours: u64, refresh_days: u64, profile_days: u64) -> Self {
        let hours = |h: u64| {
            TimeDelta::try_hours(i64::try_from(h).unwrap_or(i64::MAX)).unwrap_or(TimeDelta::MAX)
        };
        let days = |d: u64| {
            TimeDelta::try_days(i64::try_from(d).unwrap_or(i64::MAX)).unwrap_or(TimeDelta::MAX)
        };
        Self {
            token: hours(token_hours),
            refresh_token: days(refresh_days),
            profile: days(profile_days),
        }
    }
}

/// Where the access token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Entry<T> {
    /// `None` for the access token when it lives in the keyring.
    #[serde(default)]
    value: Option<T>,
    expires_at: DateTime<Utc>,
}

impl<T> Entry<T> {
    fn new(value: Option<T>, ttl: TimeDelta, now: DateTime<Utc>) -> Self {
        Self {
            value,
            expires_at: now + ttl,
        }
    }

    fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    #[serde(default)]
    token: Option<Entry<String>>,
    #[serde(default)]
    refresh_token: Option<Entry<String>>,
    /// Kept as raw JSON so an unparsable profile does not hide the tokens.
    #[serde(default)]
    user: Option<Entry<serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContextFile {
    #[serde(default)]
    pub(crate) active_organization: Option<String>,
    #[serde(default)]
    pub(crate) active_project: Option<String>,
}

/// Persistent session for one user of one machine.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
    ttl: SessionTtl,
    keyring_service: Option<String>,
}

impl SessionStore {
    /// Open a store rooted at `dir`. Nothing is read or written until used.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, ttl: SessionTtl) -> Self {
        Self {
            dir: dir.into(),
            ttl,
            keyring_service: None,
        }
    }

    /// Open a store in `~/.ticketdesk`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSessionDir` if the home directory is unknown.
    pub fn in_home(ttl: SessionTtl) -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or(SessionError::NoSessionDir)?;
        Ok(Self::new(home.join(".ticketdesk"), ttl))
    }

    /// Keep the access token in the OS keychain (service from
    /// `DESK_KEYRING_SERVICE`, default `ticketdesk-cli`).
    #[must_use]
    pub fn with_keyring(mut self) -> Self {
        self.keyring_service = Some(token_store::default_service());
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a freshly issued session.
    ///
    /// The access token gets the short TTL; the refresh token and profile get
    /// the longer ones.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the session file cannot be written.
    pub fn save(&self, token: &str, refresh_token: &str, user: &User) -> Result<(), SessionError> {
        let now = Utc::now();
        let profile = serde_json::to_value(user)
            .map_err(|e| SessionError::Store(format!("serialize user: {e}")))?;

        let file = SessionFile {
            token: Some(Entry::new(self.place_token(token), self.ttl.token, now)),
            refresh_token: Some(Entry::new(
                Some(refresh_token.to_string()),
                self.ttl.refresh_token,
                now,
            )),
            user: Some(Entry::new(Some(profile), self.ttl.profile, now)),
        };
        self.write_session(&file)
    }

    /// Replace the tokens after a refresh, keeping the cached profile.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the session file cannot be written.
    pub fn update_tokens(
        &self,
        token: &str,
        refresh_token: Option<&str>,
    ) -> Result<(), SessionError> {
        let now = Utc::now();
        let mut file = self.read_session();
        file.token = Some(Entry::new(self.place_token(token), self.ttl.token, now));
        if let Some(refresh_token) = refresh_token {
            file.refresh_token = Some(Entry::new(
                Some(refresh_token.to_string()),
                self.ttl.refresh_token,
                now,
            ));
        }
        self.write_session(&file)
    }

    /// The stored access token, if present and not expired.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.stored_token().map(|(token, _)| token)
    }

    /// The access token to send: keyring → `DESK_AUTH__TOKEN` → session file.
    #[must_use]
    pub fn resolve_token(&self) -> Option<(String, TokenSource)> {
        let stored = self.stored_token();
        if matches!(stored, Some((_, TokenSource::Keyring))) {
            return stored;
        }
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Some((token, TokenSource::Env)),
            _ => stored,
        }
    }

    /// The stored refresh token, if present and not expired.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        let now = Utc::now();
        self.read_session()
            .refresh_token
            .filter(|entry| entry.is_live(now))
            .and_then(|entry| entry.value)
            .filter(|token| !token.is_empty())
    }

    /// The cached user profile, if present, not expired, and parsable.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let now = Utc::now();
        let raw = self
            .read_session()
            .user
            .filter(|entry| entry.is_live(now))
            .and_then(|entry| entry.value)?;
        match serde_json::from_value(raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::debug!(%error, "cached user profile is unparsable");
                None
            }
        }
    }

    /// Remove every auth and context key. Leaves no residual session state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if a session file cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        if let Some(service) = &self.keyring_service {
            token_store::keyring_delete(service);
        }
        token_store::remove_if_exists(&self.session_path())?;
        token_store::remove_if_exists(&self.context_path())?;
        Ok(())
    }

    // --- context file (used by the ContextStore impl) ---

    pub(crate) fn read_context(&self) -> ContextFile {
        read_json(&self.context_path()).unwrap_or_default()
    }

    pub(crate) fn write_context(&self, context: &ContextFile) -> Result<(), SessionError> {
        if context.active_organization.is_none() && context.active_project.is_none() {
            return token_store::remove_if_exists(&self.context_path());
        }
        let bytes = serde_json::to_vec_pretty(context)
            .map_err(|e| SessionError::Store(format!("serialize context: {e}")))?;
        token_store::write_private(&self.context_path(), &bytes)
    }

    // --- private helpers ---

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    fn context_path(&self) -> PathBuf {
        self.dir.join(CONTEXT_FILE)
    }

    /// Put the token in the keyring when enabled; returns what the file keeps.
    fn place_token(&self, token: &str) -> Option<String> {
        if let Some(service) = &self.keyring_service {
            match token_store::keyring_store(service, token) {
                Ok(()) => return None,
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        Some(token.to_string())
    }

    fn stored_token(&self) -> Option<(String, TokenSource)> {
        let now = Utc::now();
        let entry = self.read_session().token.filter(|entry| entry.is_live(now))?;
        match entry.value {
            Some(token) if !token.is_empty() => Some((token, TokenSource::File)),
            Some(_) => None,
            None => {
                let service = self.keyring_service.as_deref()?;
                token_store::keyring_load(service).map(|token| (token, TokenSource::Keyring))
            }
        }
    }

    fn read_session(&self) -> SessionFile {
        read_json(&self.session_path()).unwrap_or_default()
    }

    fn write_session(&self, file: &SessionFile) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec_pretty(file)
            .map_err(|e| SessionError::Store(format!("serialize session: {e}")))?;
        token_store::write_private(&self.session_path(), &bytes)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "ignoring unreadable session file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use desk_core::enums::Role;

    use super::*;

    fn manager() -> User {
        User {
            id: "u-mgr".into(),
            name: "Morgan".into(),
            email: "morgan@example.com".into(),
            role: Role::Manager,
            is_system_admin: false,
            is_active: true,
        }
    }

    fn store(tmp: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(tmp.path(), SessionTtl::default())
    }

    #[test]
    fn save_then_read_back() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store(&tmp);
        store.save("tok", "ref", &manager()).expect("save");

        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref"));
        assert_eq!(store.user(), Some(manager()));
    }

    #[test]
    fn empty_store_reads_nothing() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store(&tmp);
        assert!(store.token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn entries_expire_independently() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let ttl = SessionTtl {
            token: TimeDelta::seconds(-1),
            ..SessionTtl::default()
        };
        let store = SessionStore::new(tmp.path(), ttl);
        store.save("tok", "ref", &manager()).expect("save");

        assert!(store.token().is_none(), "expired access token reads as absent");
        assert_eq!(store.refresh_token().as_deref(), Some("ref"));
        assert!(store.user().is_some());
    }

    #[test]
    fn unparsable_profile_reads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store(&tmp);
        store.save("tok", "ref", &manager()).expect("save");

        let path = tmp.path().join(SESSION_FILE);
        let mut raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        raw["user"]["value"] = serde_json::json!({"id": 42});
        std::fs::write(&path, raw.to_string()).expect("write");

        assert!(store.user().is_none());
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn corrupt_session_file_reads_as_empty() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        std::fs::write(tmp.path().join(SESSION_FILE), "not json").expect("write");
        let store = store(&tmp);
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn update_tokens_keeps_profile() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = store(&tmp);
        store.save("tok", "ref", &manager()).expect("save");
        store.update_tokens("tok-2", None).expect("update");

        assert_eq!(store.token().as_deref(), Some("tok-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("ref"));
        assert_eq!(store.user().map(|u| u.id), Some("u-mgr".to_string()));
    }

    #[test]
    fn ttl_from_config_values() {
        let ttl = SessionTtl::new(2, 3, 4);
        assert_eq!(ttl.token, TimeDelta::hours(2));
        assert_eq!(ttl.refresh_token, TimeDelta::days(3));
        assert_eq!(ttl.profile, TimeDelta::days(4));
    }
}
