use pretty_assertions::assert_eq;
use session::{KeyValueStore, MemoryStore, SessionController};
use shared_types::{Role, ALL_ROLES, CURRENT_USER_KEY, USER_ROLE_KEY};

use crate::common;

#[test]
fn test_login_then_reload_round_trips() {
    for role in ALL_ROLES.iter().copied() {
        let mut ctl = common::controller();
        let original = ctl.login("rudo@school.ac.zw", "pw", role).unwrap();

        // A reload only keeps what is in storage
        let mut reloaded = SessionController::new(ctl.into_store());
        let restored = reloaded.restore().expect("session should survive a reload");

        assert_eq!(restored.email, original.email);
        assert_eq!(restored.role, original.role);
        assert_eq!(restored.uid, original.uid);
        assert!(reloaded.is_active());
    }
}

#[test]
fn test_restore_seeded_session() {
    let mut ctl = SessionController::new(common::seeded_store("sarah@school.ac.zw", "clerk"));
    let session = ctl.restore().unwrap();
    assert_eq!(session.role, Role::Clerk);
    assert_eq!(session.display_name, "Sarah Clerk");
}

#[test]
fn test_restore_empty_storage() {
    let mut ctl = common::controller();
    assert_eq!(ctl.restore(), None);
    assert!(!ctl.is_active());
}

#[test]
fn test_corrupt_user_clears_both_keys() {
    let store = MemoryStore::with_entries([
        (CURRENT_USER_KEY, "{not json"),
        (USER_ROLE_KEY, "teacher"),
    ]);
    let mut ctl = SessionController::new(store);

    assert_eq!(ctl.restore(), None);
    assert!(!ctl.store().contains(CURRENT_USER_KEY));
    assert!(!ctl.store().contains(USER_ROLE_KEY));

    // Second restore is clean and error-free
    assert_eq!(ctl.restore(), None);
    assert!(ctl.load().unwrap().is_none());
}

#[test]
fn test_unknown_stored_role_is_cleared() {
    let mut store = common::seeded_store("a@b.zw", "admin");
    store.set(USER_ROLE_KEY, "headmaster").unwrap();
    let mut ctl = SessionController::new(store);

    assert!(ctl.load().unwrap_err().is_corrupt_state());
    assert_eq!(ctl.restore(), None);
    assert!(ctl.store().is_empty());
}

#[test]
fn test_missing_role_restores_as_student() {
    let store = MemoryStore::with_entries([(
        CURRENT_USER_KEY.to_string(),
        common::stored_user_json("t@s.zw", "Tafadzwa Student"),
    )]);
    let mut ctl = SessionController::new(store);
    assert_eq!(ctl.restore().unwrap().role, Role::Student);
}

#[test]
fn test_user_record_without_optional_fields() {
    let store = MemoryStore::with_entries([
        (CURRENT_USER_KEY, r#"{"email":"x@y.zw","displayName":"X","uid":"user_1"}"#),
        (USER_ROLE_KEY, "parent"),
    ]);
    let mut ctl = SessionController::new(store);
    let session = ctl.restore().expect("photoURL and emailVerified are optional");
    assert_eq!(session.email, "x@y.zw");
    assert_eq!(session.role, Role::Parent);
}
