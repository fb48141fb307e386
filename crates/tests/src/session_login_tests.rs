use pretty_assertions::assert_eq;
use session::KeyValueStore;
use shared_types::{
    AppErrorKind, Role, StoredUser, ALL_ROLES, CURRENT_USER_KEY, USER_ROLE_KEY,
};

use crate::common;

#[test]
fn test_login_persists_both_keys_for_every_role() {
    for role in ALL_ROLES.iter().copied() {
        let mut ctl = common::controller();
        let session = ctl
            .login("tendai@school.ac.zw", "pw", role)
            .expect("login should succeed");

        assert_eq!(session.role, role);
        assert_eq!(session.email, "tendai@school.ac.zw");
        assert_eq!(session.display_name, role.display_name());
        assert!(ctl.is_active(), "session should be active after login as {}", role);

        assert_eq!(ctl.store().get(USER_ROLE_KEY).as_deref(), Some(role.as_str()));
        let raw = ctl
            .store()
            .get(CURRENT_USER_KEY)
            .expect("currentUser should be written");
        let stored: StoredUser = serde_json::from_str(&raw).expect("currentUser should be JSON");
        assert_eq!(stored.email, "tendai@school.ac.zw");
        assert_eq!(stored.uid, session.uid);
    }
}

#[test]
fn test_login_writes_browser_compatible_json() {
    let mut ctl = common::controller();
    ctl.login("grace@home.zw", "pw", Role::Parent).unwrap();

    let raw = ctl.store().get(CURRENT_USER_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["email"], "grace@home.zw");
    assert_eq!(json["displayName"], "Grace Parent");
    assert_eq!(json["photoURL"], serde_json::Value::Null);
    assert_eq!(json["emailVerified"], true);
    assert!(json["uid"].as_str().unwrap().starts_with("user_"));
}

#[test]
fn test_each_login_gets_a_fresh_uid() {
    let mut ctl = common::controller();
    let first = ctl.login("a@b.zw", "pw", Role::Student).unwrap();
    let second = ctl.login("a@b.zw", "pw", Role::Student).unwrap();
    assert_ne!(first.uid, second.uid);
}

#[test]
fn test_login_over_existing_session_replaces_it() {
    let mut ctl = common::controller();
    ctl.login("a@b.zw", "pw", Role::Admin).unwrap();
    ctl.login("c@d.zw", "pw", Role::Clerk).unwrap();

    let current = ctl.current().expect("second login should be active");
    assert_eq!(current.email, "c@d.zw");
    assert_eq!(current.role, Role::Clerk);
    assert_eq!(ctl.store().get(USER_ROLE_KEY).as_deref(), Some("clerk"));
}

#[test]
fn test_blank_email_or_password_is_rejected() {
    for (email, password) in [("", "pw"), ("a@b.zw", ""), ("", "")] {
        let mut ctl = common::controller();
        let err = ctl
            .login(email, password, Role::Teacher)
            .expect_err("blank field should be rejected");

        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, session::controller::LOGIN_REQUIRED_MESSAGE);
        assert!(!ctl.is_active());
        assert!(ctl.store().is_empty(), "nothing should be persisted");
    }
}

#[test]
fn test_rejected_login_keeps_previous_session() {
    let mut ctl = common::controller();
    let before = ctl.login("a@b.zw", "pw", Role::Admin).unwrap();
    ctl.login("", "pw", Role::Student).unwrap_err();

    assert_eq!(ctl.current(), Some(&before));
    assert_eq!(ctl.store().get(USER_ROLE_KEY).as_deref(), Some("admin"));
}

#[test]
fn test_storage_failure_leaves_session_inactive() {
    let mut ctl = session::SessionController::new(common::RejectingStore::full());
    let err = ctl.login("a@b.zw", "pw", Role::Admin).unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Storage);
    assert!(!ctl.is_active());
}

#[test]
fn test_failed_login_over_active_session_keeps_it_persisted() {
    let mut ctl = session::SessionController::new(common::RejectingStore::accepting());
    let first = ctl.login("a@b.zw", "pw", Role::Admin).unwrap();

    ctl.store_mut().reject(USER_ROLE_KEY);
    let err = ctl
        .login("c@d.zw", "pw", Role::Clerk)
        .expect_err("role write should fail");
    assert_eq!(err.kind, AppErrorKind::Storage);

    // Memory and storage still agree on the first session
    assert!(ctl.is_active());
    assert_eq!(ctl.current(), Some(&first));
    assert_eq!(ctl.store().get(USER_ROLE_KEY).as_deref(), Some("admin"));
    let raw = ctl.store().get(CURRENT_USER_KEY).expect("previous user should be kept");
    let stored: StoredUser = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.email, "a@b.zw");

    let mut reloaded = session::SessionController::new(ctl.into_store());
    let restored = reloaded.restore().expect("first session should survive a reload");
    assert_eq!(restored.email, "a@b.zw");
    assert_eq!(restored.role, Role::Admin);
}

#[test]
fn test_failed_first_login_leaves_no_user_record() {
    let mut store = common::RejectingStore::accepting();
    store.reject(USER_ROLE_KEY);
    let mut ctl = session::SessionController::new(store);

    ctl.login("a@b.zw", "pw", Role::Teacher).unwrap_err();
    assert!(!ctl.is_active());
    assert!(ctl.store().inner.is_empty());
}
