//! Keyring slot for the access token and private file helpers.

use std::fs;
use std::path::Path;

use crate::error::SessionError;

const DEFAULT_KEYRING_SERVICE: &str = "ticketdesk-cli";
const KEYRING_USER: &str = "access-token";

/// Returns the keyring service name.
///
/// Defaults to `"ticketdesk-cli"`. Override via `DESK_KEYRING_SERVICE` env var
/// for testing to avoid touching real credentials.
pub(crate) fn default_service() -> String {
    std::env::var("DESK_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store the access token in the OS keychain.
pub(crate) fn keyring_store(service: &str, token: &str) -> Result<(), SessionError> {
    let entry = keyring::Entry::new(service, KEYRING_USER)
        .map_err(|e| SessionError::Keyring(e.to_string()))?;
    entry
        .set_password(token)
        .map_err(|e| SessionError::Keyring(e.to_string()))
}

pub(crate) fn keyring_load(service: &str) -> Option<String> {
    let entry = keyring::Entry::new(service, KEYRING_USER).ok()?;
    entry.get_password().ok().filter(|token| !token.is_empty())
}

/// Remove the keychain entry. Missing entries are not an error.
pub(crate) fn keyring_delete(service: &str) {
    if let Ok(entry) = keyring::Entry::new(service, KEYRING_USER)
        && let Err(error) = entry.delete_credential()
        && !matches!(error, keyring::Error::NoEntry)
    {
        tracing::debug!(%error, "keyring delete failed");
    }
}

/// Write `contents` to `path` readable only by the owner (Unix).
pub(crate) fn write_private(path: &Path, contents: &[u8]) -> Result<(), SessionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| SessionError::Store(format!("mkdir {}: {e}", parent.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, contents)
        .map_err(|e| SessionError::Store(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .map_err(|e| SessionError::Store(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

/// Delete `path` if it exists.
pub(crate) fn remove_if_exists(path: &Path) -> Result<(), SessionError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionError::Store(format!(
            "failed to delete {}: {e}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_private_sets_owner_only_mode() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("nested").join("session.json");

        write_private(&path, b"{}").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "{}");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }
    }

    #[test]
    fn remove_missing_file_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(remove_if_exists(&tmp.path().join("absent.json")).is_ok());
    }
}
