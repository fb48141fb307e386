use pretty_assertions::assert_eq;
use session::{CredentialsStore, KeyValueStore, MemoryStore};
use shared_types::{
    ServiceCredentials, API_KEY_KEY, APP_ID_KEY, DEMO_API_KEY, DEMO_APP_ID, DEMO_PROJECT_ID,
    PROJECT_ID_KEY,
};

use crate::common;

#[test]
fn test_defaults_are_demo_placeholders() {
    let creds = CredentialsStore::new(MemoryStore::new());
    assert_eq!(
        creds.load(),
        ServiceCredentials {
            api_key: DEMO_API_KEY.to_string(),
            project_id: DEMO_PROJECT_ID.to_string(),
            app_id: DEMO_APP_ID.to_string(),
        }
    );
    assert!(creds.needs_prompt());
}

#[test]
fn test_partial_credentials_still_prompt() {
    let store = MemoryStore::with_entries([(API_KEY_KEY, "AIzaReal")]);
    let creds = CredentialsStore::new(store);
    let loaded = creds.load();
    assert_eq!(loaded.api_key, "AIzaReal");
    assert_eq!(loaded.project_id, DEMO_PROJECT_ID);
    assert!(creds.needs_prompt());
}

#[test]
fn test_set_credentials_writes_all_three_keys() {
    let mut store = MemoryStore::new();
    CredentialsStore::new(&mut store)
        .set_credentials("AIzaReal", "chikoro-harare", "1:42:web:abc")
        .expect("non-blank credentials should save");

    assert_eq!(store.get(API_KEY_KEY).as_deref(), Some("AIzaReal"));
    assert_eq!(store.get(PROJECT_ID_KEY).as_deref(), Some("chikoro-harare"));
    assert_eq!(store.get(APP_ID_KEY).as_deref(), Some("1:42:web:abc"));
}

#[test]
fn test_blank_credential_is_rejected() {
    let mut store = MemoryStore::new();
    let err = CredentialsStore::new(&mut store)
        .set_credentials("AIzaReal", "chikoro-harare", "")
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.message, session::credentials::CREDENTIALS_REQUIRED_MESSAGE);
    assert!(store.is_empty());
}

#[test]
fn test_credentials_survive_logout() {
    let mut shell = common::fresh_shell();
    shell
        .credentials()
        .set_credentials("AIzaReal", "chikoro-harare", "1:42:web:abc")
        .unwrap();
    common::sign_in(&mut shell, shared_types::Role::Admin);
    shell.logout();

    assert!(shell.service_credentials().is_configured());
}
