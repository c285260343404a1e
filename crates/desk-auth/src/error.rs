use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not signed in: run `desk auth login`")]
    NotAuthenticated,

    #[error("session expired: run `desk auth login` or `desk auth refresh`")]
    Expired,

    #[error("home directory not found: cannot store session")]
    NoSessionDir,

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("session store error: {0}")]
    Store(String),

    #[error("{0}")]
    Other(String),
}
