use anyhow::Context;
use desk_api::ApiClient;
use desk_auth::{SessionStore, SessionTtl};
use desk_config::DeskConfig;
use desk_core::entities::User;
use desk_rbac::{Phase, RbacContext};

use crate::bootstrap::api_base_url;
use crate::progress::Progress;

pub type Access = RbacContext<ApiClient, SessionStore>;

/// Shared resources for every signed-in command.
pub struct AppContext {
    pub config: DeskConfig,
    pub api: ApiClient,
    pub user: User,
    rbac: Access,
}

impl AppContext {
    /// Build the context from the stored session.
    ///
    /// Fails when there is no usable token or cached profile; contexts and
    /// permissions are loaded lazily by [`Self::access`].
    pub fn init(config: DeskConfig) -> anyhow::Result<Self> {
        let session = open_session(&config)?;
        let (token, source) = session
            .resolve_token()
            .context("not signed in: run `desk auth login`")?;
        tracing::debug!(?source, "using stored access token");

        let user = session
            .user()
            .context("cached profile has expired: run `desk auth login`")?;
        let api = api_client(&config)?.with_token(token);
        let rbac = RbacContext::new(api.clone(), session);

        Ok(Self {
            config,
            api,
            user,
            rbac,
        })
    }

    /// The RBAC context, loading contexts and permissions on first use.
    pub async fn access(&self) -> &Access {
        if self.rbac.phase() == Phase::Unauthenticated {
            let spinner = Progress::spinner("Loading permissions…");
            self.rbac.refresh().await;
            spinner.finish_clear();
        }
        &self.rbac
    }

    /// Whether the signed-in user may use `permission` in the active context.
    /// System admins may use everything.
    pub async fn can(&self, permission: &str) -> bool {
        let access = self.access().await;
        access.is_system_admin() || self.user.is_system_admin || access.has_permission(permission)
    }
}

/// Open the session store configured in `[session]`.
pub fn open_session(config: &DeskConfig) -> anyhow::Result<SessionStore> {
    let dir = config
        .session
        .resolve_dir()
        .context("cannot locate a session directory: set DESK_SESSION__DIR")?;
    let ttl = SessionTtl::new(
        config.session.token_ttl_hours,
        config.session.refresh_ttl_days,
        config.session.profile_ttl_days,
    );
    let store = SessionStore::new(dir, ttl);
    Ok(if config.session.use_keyring {
        store.with_keyring()
    } else {
        store
    })
}

/// An unauthenticated API client for the configured base URL.
pub fn api_client(config: &DeskConfig) -> anyhow::Result<ApiClient> {
    let base_url = api_base_url(config)?;
    ApiClient::new(base_url, config.api.timeout()).context("failed to build HTTP client")
}
