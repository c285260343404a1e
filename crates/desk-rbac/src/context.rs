//! The RBAC context: loaded contexts, active selection, and permissions.
//!
//! ```text
//! Unauthenticated → LoadingContexts → ContextsLoaded → LoadingPermissions → PermissionsLoaded
//!                                                          ↑
//!                       switch_organization / switch_project
//! ```
//!
//! Each load takes a generation number. A load whose generation is no longer
//! current when its fetch returns is dropped without touching state, so a
//! slow response can never overwrite a newer selection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use desk_api::auth::MeContexts;
use desk_auth::ContextStore;
use desk_core::entities::{Organization, Project};
use desk_core::permissions::PermissionSet;
use serde::Serialize;

use crate::error::RbacError;
use crate::selection::{Selection, auto_select, first_project_in};
use crate::source::AccessSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Unauthenticated,
    LoadingContexts,
    ContextsLoaded,
    LoadingPermissions,
    PermissionsLoaded,
}

/// Result of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed,
    /// A newer load started first; this one's results were discarded.
    Superseded,
}

/// Point-in-time copy of the context.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RbacState {
    pub phase: Phase,
    pub organizations: Vec<Organization>,
    pub projects: Vec<Project>,
    pub active_organization: Option<String>,
    pub active_project: Option<String>,
    pub permissions: PermissionSet,
    pub is_system_admin: bool,
}

impl RbacState {
    /// Projects of the active organization.
    pub fn active_projects(&self) -> impl Iterator<Item = &Project> {
        let org = self.active_organization.as_deref();
        self.projects
            .iter()
            .filter(move |p| org.is_some_and(|o| p.belongs_to(o)))
    }
}

pub struct RbacContext<S, C> {
    source: S,
    store: C,
    state: RwLock<RbacState>,
    generation: AtomicU64,
}

impl<S: AccessSource, C: ContextStore> RbacContext<S, C> {
    pub fn new(source: S, store: C) -> Self {
        Self {
            source,
            store,
            state: RwLock::new(RbacState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Load contexts, reconcile the persisted selection, then load permissions.
    ///
    /// Fetch failures are logged and read as empty lists / no permissions.
    pub async fn refresh(&self) -> LoadOutcome {
        let generation = self.next_generation();
        self.write().phase = Phase::LoadingContexts;

        let contexts = self.source.fetch_contexts().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load contexts; continuing with none");
            MeContexts::default()
        });
        if !self.is_current(generation) {
            tracing::debug!(generation, "discarding superseded context load");
            return LoadOutcome::Superseded;
        }

        let selection = auto_select(
            &contexts,
            self.store.active_organization().as_deref(),
            self.store.active_project().as_deref(),
        );
        self.persist_quietly(&selection);
        tracing::debug!(
            organization = ?selection.organization,
            project = ?selection.project,
            "context selected"
        );

        if !self.commit_contexts(generation, contexts, selection) {
            return LoadOutcome::Superseded;
        }
        self.load_permissions(generation).await
    }

    /// Make `id` the active organization.
    ///
    /// The previous project is dropped and replaced by the first project of
    /// the new organization, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::UnknownOrganization`] if `id` was not among the
    /// loaded organizations, or [`RbacError::Session`] if the selection
    /// cannot be persisted.
    pub async fn switch_organization(&self, id: &str) -> Result<LoadOutcome, RbacError> {
        let project = {
            let state = self.read();
            if !state.organizations.iter().any(|o| o.id == id) {
                return Err(RbacError::UnknownOrganization(id.to_string()));
            }
            first_project_in(&state.projects, id)
        };
        self.store.set_active_organization(Some(id))?;
        self.store.set_active_project(project.as_deref())?;

        let generation = self.next_generation();
        {
            let mut state = self.write();
            state.active_organization = Some(id.to_string());
            state.active_project = project;
        }
        Ok(self.load_permissions(generation).await)
    }

    /// Make `id` the active project. It must belong to the active organization.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::NoActiveOrganization`], [`RbacError::UnknownProject`],
    /// [`RbacError::ProjectOutsideOrganization`], or [`RbacError::Session`].
    pub async fn switch_project(&self, id: &str) -> Result<LoadOutcome, RbacError> {
        {
            let state = self.read();
            let organization = state
                .active_organization
                .clone()
                .ok_or(RbacError::NoActiveOrganization)?;
            let project = state
                .projects
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| RbacError::UnknownProject(id.to_string()))?;
            if !project.belongs_to(&organization) {
                return Err(RbacError::ProjectOutsideOrganization {
                    project: id.to_string(),
                    organization,
                });
            }
        }
        self.store.set_active_project(Some(id))?;

        let generation = self.next_generation();
        self.write().active_project = Some(id.to_string());
        Ok(self.load_permissions(generation).await)
    }

    /// Whether the loaded permissions grant `permission`.
    ///
    /// Nothing loaded means nothing granted. System admin status is separate;
    /// see [`Self::is_system_admin`].
    pub fn has_permission(&self, permission: &str) -> bool {
        self.read().permissions.allows(permission)
    }

    pub fn is_system_admin(&self) -> bool {
        self.read().is_system_admin
    }

    pub fn phase(&self) -> Phase {
        self.read().phase
    }

    pub fn active_organization(&self) -> Option<String> {
        self.read().active_organization.clone()
    }

    pub fn active_project(&self) -> Option<String> {
        self.read().active_project.clone()
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot(&self) -> RbacState {
        self.read().clone()
    }

    /// Drop everything loaded and return to `Unauthenticated`.
    ///
    /// Any load still in flight is superseded.
    pub fn clear(&self) {
        self.next_generation();
        *self.write() = RbacState::default();
    }

    // --- private ---

    async fn load_permissions(&self, generation: u64) -> LoadOutcome {
        let (organization, project) = {
            let mut state = self.write();
            if !self.is_current(generation) {
                return LoadOutcome::Superseded;
            }
            // Grants belong to the previous selection until the fetch lands.
            state.permissions = PermissionSet::default();
            state.phase = Phase::LoadingPermissions;
            (state.active_organization.clone(), state.active_project.clone())
        };

        let permissions = self
            .source
            .fetch_permissions(organization.as_deref(), project.as_deref())
            .await
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "failed to load permissions; treating as none");
                PermissionSet::default()
            });

        let mut state = self.write();
        if !self.is_current(generation) {
            tracing::debug!(generation, "discarding superseded permission load");
            return LoadOutcome::Superseded;
        }
        state.permissions = permissions;
        state.phase = Phase::PermissionsLoaded;
        LoadOutcome::Committed
    }

    fn commit_contexts(&self, generation: u64, contexts: MeContexts, selection: Selection) -> bool {
        let mut state = self.write();
        if !self.is_current(generation) {
            return false;
        }
        state.organizations = contexts.organizations;
        state.projects = contexts.projects;
        state.is_system_admin = contexts.is_system_admin;
        state.active_organization = selection.organization;
        state.active_project = selection.project;
        state.permissions = PermissionSet::default();
        state.phase = Phase::ContextsLoaded;
        true
    }

    fn persist_quietly(&self, selection: &Selection) {
        let result = self
            .store
            .set_active_organization(selection.organization.as_deref())
            .and_then(|()| self.store.set_active_project(selection.project.as_deref()));
        if let Err(error) = result {
            tracing::warn!(%error, "failed to persist context selection");
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    fn read(&self) -> RwLockReadGuard<'_, RbacState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RbacState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
