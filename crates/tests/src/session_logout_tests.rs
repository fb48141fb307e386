use session::KeyValueStore;
use shared_types::{Role, ALL_ROLES, CURRENT_USER_KEY, USER_ROLE_KEY};

use crate::common;

#[test]
fn test_logout_clears_memory_and_storage() {
    let mut ctl = common::controller();
    ctl.login("a@b.zw", "pw", Role::Teacher).unwrap();
    ctl.logout();

    assert!(!ctl.is_active());
    assert!(!ctl.store().contains(CURRENT_USER_KEY));
    assert!(!ctl.store().contains(USER_ROLE_KEY));
}

#[test]
fn test_logout_then_restore_yields_no_session() {
    for role in ALL_ROLES.iter().copied() {
        let mut ctl = common::controller();
        ctl.login("a@b.zw", "pw", role).unwrap();
        ctl.logout();

        let mut reloaded = session::SessionController::new(ctl.into_store());
        assert_eq!(reloaded.restore(), None);
    }
}

#[test]
fn test_logout_without_session_is_a_noop() {
    let mut ctl = common::controller();
    ctl.logout();
    ctl.logout();
    assert!(!ctl.is_active());
    assert!(ctl.store().is_empty());
}

#[test]
fn test_logout_leaves_credentials_alone() {
    let mut store = common::seeded_store("a@b.zw", "admin");
    store
        .set(shared_types::API_KEY_KEY, "AIzaReal")
        .unwrap();

    let mut ctl = session::SessionController::new(store);
    ctl.restore();
    ctl.logout();

    assert_eq!(
        ctl.store().get(shared_types::API_KEY_KEY).as_deref(),
        Some("AIzaReal")
    );
    assert_eq!(ctl.store().len(), 1);
}
