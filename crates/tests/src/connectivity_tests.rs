use pretty_assertions::assert_eq;
use shared_types::{Connectivity, Role, UiState};

use crate::common;

#[test]
fn test_badge_follows_online_offline_events() {
    let mut shell = common::fresh_shell();

    let badge = shell.render_connectivity(false);
    assert_eq!((badge.class, badge.icon, badge.label), ("offline", "cloud_off", "Offline"));

    let badge = shell.render_connectivity(true);
    assert_eq!((badge.class, badge.icon, badge.label), ("online", "cloud_done", "Online"));
}

#[test]
fn test_repeated_events_are_stable() {
    let mut shell = common::fresh_shell();
    shell.render_connectivity(false);
    shell.render_connectivity(false);
    assert_eq!(shell.view().connectivity(), Connectivity::Offline);
    assert_eq!(shell.view().badge().label, "Offline");
}

#[test]
fn test_connectivity_is_independent_of_login() {
    let mut shell = common::fresh_shell();
    shell.render_connectivity(false);

    common::sign_in(&mut shell, Role::Teacher);
    assert_eq!(shell.view().connectivity(), Connectivity::Offline);

    shell.render_connectivity(true);
    assert_eq!(shell.state(), UiState::LoggedIn(Role::Teacher));

    shell.logout();
    assert_eq!(shell.view().connectivity(), Connectivity::Online);
}

#[test]
fn test_connectivity_does_not_change_panels() {
    let mut shell = common::fresh_shell();
    common::sign_in(&mut shell, Role::Parent);
    let before = *shell.view().panels();

    shell.render_connectivity(false);
    assert_eq!(shell.view().panels(), &before);
}
