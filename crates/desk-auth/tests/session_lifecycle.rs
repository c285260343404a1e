//! Sign in, switch context, sign out.

use desk_auth::{ContextStore, SessionStore, SessionTtl};
use desk_core::entities::User;
use desk_core::enums::Role;
use pretty_assertions::assert_eq;

fn resolver() -> User {
    User {
        id: "u-res".into(),
        name: "Sam".into(),
        email: "sam@example.com".into(),
        role: Role::Resolver,
        is_system_admin: false,
        is_active: true,
    }
}

#[test]
fn logout_leaves_no_residual_state() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(tmp.path(), SessionTtl::default());

    store.save("access", "refresh", &resolver()).expect("save");
    store.set_active_organization(Some("org-1")).expect("org");
    store.set_active_project(Some("proj-1")).expect("project");
    assert_eq!(store.user().map(|u| u.role), Some(Role::Resolver));

    store.clear().expect("clear");

    assert!(store.token().is_none());
    assert!(store.refresh_token().is_none());
    assert!(store.user().is_none());
    assert!(store.active_organization().is_none());
    assert!(store.active_project().is_none());
    assert_eq!(
        std::fs::read_dir(tmp.path()).expect("read dir").count(),
        0,
        "session directory should be empty after logout"
    );
}

#[test]
fn clear_on_empty_store_is_ok() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(tmp.path().join("never-created"), SessionTtl::default());
    store.clear().expect("clear should tolerate missing files");
}

#[test]
fn new_login_replaces_previous_user() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(tmp.path(), SessionTtl::default());
    store.save("a1", "r1", &resolver()).expect("first save");

    let mut manager = resolver();
    manager.id = "u-mgr".into();
    manager.role = Role::Manager;
    store.save("a2", "r2", &manager).expect("second save");

    assert_eq!(store.token().as_deref(), Some("a2"));
    assert_eq!(store.user().map(|u| u.id), Some("u-mgr".to_string()));
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = SessionStore::new(tmp.path(), SessionTtl::default());
    store.save("access", "refresh", &resolver()).expect("save");

    let mode = std::fs::metadata(tmp.path().join("session.json"))
        .expect("metadata")
        .permissions()
        .mode()
        & 0o777;
    assert_eq!(mode, 0o600);
}
