//! RBAC context behaviour against an in-memory access source.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use desk_api::ApiError;
use desk_api::auth::MeContexts;
use desk_auth::{ContextStore, MemoryContextStore};
use desk_core::entities::{Organization, Project};
use desk_core::permissions::PermissionSet;
use desk_rbac::{LoadOutcome, Phase, RbacContext, RbacError};
use pretty_assertions::assert_eq;
use tokio::sync::Notify;

fn org(id: &str) -> Organization {
    Organization {
        id: id.into(),
        name: id.into(),
        slug: id.into(),
        created_at: None,
    }
}

fn project(id: &str, org: &str) -> Project {
    Project {
        id: id.into(),
        name: id.into(),
        slug: String::new(),
        organization_id: org.into(),
    }
}

/// Serves fixed contexts; permissions are `"<org>/<project>.*"` so tests can
/// see which selection they were loaded for.
#[derive(Default)]
struct FakeSource {
    contexts: MeContexts,
    fail: bool,
    /// Hold the permission fetch with this index until `release` is notified.
    hold_call: Option<usize>,
    entered: Notify,
    release: Notify,
    permission_calls: AtomicUsize,
}

impl FakeSource {
    fn with(organizations: Vec<Organization>, projects: Vec<Project>) -> Self {
        Self {
            contexts: MeContexts {
                organizations,
                projects,
                is_system_admin: false,
            },
            ..Self::default()
        }
    }

    fn unavailable() -> ApiError {
        ApiError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        }
    }
}

impl desk_rbac::AccessSource for FakeSource {
    async fn fetch_contexts(&self) -> Result<MeContexts, ApiError> {
        if self.fail {
            return Err(Self::unavailable());
        }
        Ok(self.contexts.clone())
    }

    async fn fetch_permissions(
        &self,
        organization_id: Option<&str>,
        project_id: Option<&str>,
    ) -> Result<PermissionSet, ApiError> {
        let call = self.permission_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::unavailable());
        }
        if self.hold_call == Some(call) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        let scope = format!(
            "{}/{}.*",
            organization_id.unwrap_or("-"),
            project_id.unwrap_or("-")
        );
        Ok(PermissionSet::new([scope]))
    }
}

#[tokio::test]
async fn first_organization_is_selected_and_persisted() {
    let store = MemoryContextStore::new();
    let ctx = RbacContext::new(
        FakeSource::with(
            vec![org("A"), org("B")],
            vec![project("a-1", "A"), project("b-1", "B")],
        ),
        store,
    );

    assert_eq!(ctx.phase(), Phase::Unauthenticated);
    assert_eq!(ctx.refresh().await, LoadOutcome::Committed);

    assert_eq!(ctx.phase(), Phase::PermissionsLoaded);
    assert_eq!(ctx.active_organization().as_deref(), Some("A"));
    assert_eq!(ctx.active_project().as_deref(), Some("a-1"));
    assert!(ctx.has_permission("A/a-1.ticket.create"));
}

#[tokio::test]
async fn stale_stored_organization_is_discarded() {
    let store = MemoryContextStore::with_selection(Some("gone"), None);
    let ctx = RbacContext::new(FakeSource::with(vec![org("A"), org("B")], vec![]), store);

    ctx.refresh().await;

    assert_eq!(ctx.active_organization().as_deref(), Some("A"));
    assert_eq!(ctx.active_project(), None);
}

#[tokio::test]
async fn stale_stored_project_falls_back_to_first_in_org() {
    let store = MemoryContextStore::with_selection(Some("org-1"), Some("proj-404"));
    let ctx = RbacContext::new(
        FakeSource::with(vec![org("org-1")], vec![project("proj-1", "org-1")]),
        store,
    );

    ctx.refresh().await;

    assert_eq!(ctx.active_organization().as_deref(), Some("org-1"));
    assert_eq!(ctx.active_project().as_deref(), Some("proj-1"));
}

#[tokio::test]
async fn switching_organization_rederives_project_and_reloads_permissions() {
    let ctx = RbacContext::new(
        FakeSource::with(
            vec![org("A"), org("B")],
            vec![project("a-1", "A"), project("b-1", "B"), project("b-2", "B")],
        ),
        MemoryContextStore::new(),
    );
    ctx.refresh().await;
    assert_eq!(ctx.active_project().as_deref(), Some("a-1"));

    let outcome = ctx.switch_organization("B").await.expect("switch org");

    assert_eq!(outcome, LoadOutcome::Committed);
    assert_eq!(ctx.active_organization().as_deref(), Some("B"));
    assert_eq!(ctx.active_project().as_deref(), Some("b-1"));
    assert!(ctx.has_permission("B/b-1.anything"));
    assert!(!ctx.has_permission("A/a-1.anything"));
}

#[tokio::test]
async fn switching_to_organization_without_projects_leaves_none() {
    let ctx = RbacContext::new(
        FakeSource::with(vec![org("A"), org("B")], vec![project("a-1", "A")]),
        MemoryContextStore::new(),
    );
    ctx.refresh().await;

    ctx.switch_organization("B").await.expect("switch org");

    assert_eq!(ctx.active_project(), None);
    assert!(ctx.has_permission("B/-.anything"));
}

#[tokio::test]
async fn previous_grants_are_gone_while_switch_is_loading() {
    let source = FakeSource {
        hold_call: Some(1),
        ..FakeSource::with(vec![org("A"), org("B")], vec![])
    };
    let ctx = Arc::new(RbacContext::new(source, MemoryContextStore::new()));
    ctx.refresh().await;
    assert!(ctx.has_permission("A/-.org.delete"));

    let switch = tokio::spawn({
        let ctx = Arc::clone(&ctx);
        async move { ctx.switch_organization("B").await }
    });

    ctx_source_entered(&ctx).await;
    assert_eq!(ctx.phase(), Phase::LoadingPermissions);
    assert_eq!(ctx.active_organization().as_deref(), Some("B"));
    assert!(!ctx.has_permission("A/-.org.delete"));
    assert!(ctx.snapshot().permissions.is_empty());

    ctx_source_release(&ctx);
    let outcome = switch.await.expect("join").expect("switch org");
    assert_eq!(outcome, LoadOutcome::Committed);
    assert!(ctx.has_permission("B/-.org.delete"));
}

#[tokio::test]
async fn switch_to_unknown_organization_is_rejected() {
    let ctx = RbacContext::new(
        FakeSource::with(vec![org("A")], vec![]),
        MemoryContextStore::new(),
    );
    ctx.refresh().await;

    let err = ctx.switch_organization("Z").await.expect_err("unknown org");
    assert!(matches!(err, RbacError::UnknownOrganization(ref id) if id == "Z"));
    assert_eq!(ctx.active_organization().as_deref(), Some("A"));
}

#[tokio::test]
async fn project_must_belong_to_active_organization() {
    let ctx = RbacContext::new(
        FakeSource::with(
            vec![org("A"), org("B")],
            vec![project("a-1", "A"), project("a-2", "A"), project("b-1", "B")],
        ),
        MemoryContextStore::new(),
    );
    ctx.refresh().await;

    let err = ctx.switch_project("b-1").await.expect_err("foreign project");
    assert!(matches!(err, RbacError::ProjectOutsideOrganization { .. }));

    ctx.switch_project("a-2").await.expect("same-org project");
    assert_eq!(ctx.active_project().as_deref(), Some("a-2"));
    assert!(ctx.has_permission("A/a-2.x"));
}

#[tokio::test]
async fn fetch_failures_degrade_to_nothing() {
    let source = FakeSource {
        fail: true,
        ..FakeSource::default()
    };
    let ctx = RbacContext::new(source, MemoryContextStore::new());

    assert_eq!(ctx.refresh().await, LoadOutcome::Committed);

    let state = ctx.snapshot();
    assert_eq!(state.phase, Phase::PermissionsLoaded);
    assert!(state.organizations.is_empty());
    assert!(state.permissions.is_empty());
    assert!(!ctx.has_permission("ticket.create"));
}

#[tokio::test]
async fn clear_returns_to_unauthenticated() {
    let ctx = RbacContext::new(
        FakeSource::with(vec![org("A")], vec![]),
        MemoryContextStore::new(),
    );
    ctx.refresh().await;
    ctx.clear();

    let state = ctx.snapshot();
    assert_eq!(state.phase, Phase::Unauthenticated);
    assert!(state.organizations.is_empty());
    assert_eq!(state.active_organization, None);
    assert!(!ctx.has_permission("A/-.x"));
}

#[tokio::test]
async fn slow_load_is_superseded_by_newer_switch() {
    let source = FakeSource {
        hold_call: Some(0),
        ..FakeSource::with(vec![org("A"), org("B")], vec![])
    };
    let ctx = Arc::new(RbacContext::new(source, MemoryContextStore::new()));

    let slow = tokio::spawn({
        let ctx = Arc::clone(&ctx);
        async move { ctx.refresh().await }
    });

    // Wait for the first permission fetch to start, then switch underneath it.
    ctx_source_entered(&ctx).await;
    let outcome = ctx.switch_organization("B").await.expect("switch");
    assert_eq!(outcome, LoadOutcome::Committed);

    ctx_source_release(&ctx);
    assert_eq!(slow.await.expect("join"), LoadOutcome::Superseded);

    assert_eq!(ctx.active_organization().as_deref(), Some("B"));
    assert!(ctx.has_permission("B/-.x"));
    assert!(!ctx.has_permission("A/-.x"), "stale permissions must not land");
}

async fn ctx_source_entered(ctx: &RbacContext<FakeSource, MemoryContextStore>) {
    ctx.source().entered.notified().await;
}

fn ctx_source_release(ctx: &RbacContext<FakeSource, MemoryContextStore>) {
    ctx.source().release.notify_one();
}

#[tokio::test]
async fn selection_survives_into_the_store() {
    let store = Arc::new(MemoryContextStore::new());
    let ctx = RbacContext::new(
        FakeSource::with(vec![org("A"), org("B")], vec![project("b-1", "B")]),
        Arc::clone(&store),
    );
    ctx.refresh().await;
    ctx.switch_organization("B").await.expect("switch");

    assert_eq!(store.active_organization().as_deref(), Some("B"));
    assert_eq!(store.active_project().as_deref(), Some("b-1"));
}
