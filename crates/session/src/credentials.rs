use shared_types::{
    AppError, CredentialsRequest, ServiceCredentials, API_KEY_KEY, APP_ID_KEY, PROJECT_ID_KEY,
};
use validator::Validate;

use crate::storage::KeyValueStore;

/// Message shown when the credentials prompt is saved with a blank field.
pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "Please fill in all Firebase configuration fields";

/// Reads and writes the external service credentials.
pub struct CredentialsStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialsStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current credentials, with demo placeholders for anything not stored.
    pub fn load(&self) -> ServiceCredentials {
        Self::read_from(&self.store)
    }

    /// Read credentials from a store without taking ownership of it.
    pub fn read_from(store: &S) -> ServiceCredentials {
        ServiceCredentials::from_parts(
            store.get(API_KEY_KEY),
            store.get(PROJECT_ID_KEY),
            store.get(APP_ID_KEY),
        )
    }

    /// True while any credential is still a demo placeholder.
    pub fn needs_prompt(&self) -> bool {
        !self.load().is_configured()
    }

    /// Store all three credentials. Rejects the whole set if any is blank.
    pub fn set_credentials(
        &mut self,
        api_key: &str,
        project_id: &str,
        app_id: &str,
    ) -> Result<ServiceCredentials, AppError> {
        let request = CredentialsRequest {
            api_key: api_key.to_string(),
            project_id: project_id.to_string(),
            app_id: app_id.to_string(),
        };
        request
            .validate()
            .map_err(|e| AppError::from(e).with_message(CREDENTIALS_REQUIRED_MESSAGE))?;

        let entries = [
            (API_KEY_KEY, request.api_key.as_str()),
            (PROJECT_ID_KEY, request.project_id.as_str()),
            (APP_ID_KEY, request.app_id.as_str()),
        ];
        let previous: Vec<(&str, Option<String>)> = entries
            .iter()
            .map(|(key, _)| (*key, self.store.get(key)))
            .collect();

        for (written, (key, value)) in entries.into_iter().enumerate() {
            if let Err(e) = self.store.set(key, value) {
                tracing::warn!("Failed to store {}, rolling back credentials: {}", key, e);
                self.roll_back(&previous[..written]);
                return Err(e);
            }
        }
        tracing::info!("Saved service credentials for project {}", request.project_id);

        Ok(ServiceCredentials {
            api_key: request.api_key,
            project_id: request.project_id,
            app_id: request.app_id,
        })
    }

    /// Put back the values seen before a partial write. Keys that cannot be
    /// restored are removed so they fall back to the demo placeholders.
    fn roll_back(&mut self, previous: &[(&str, Option<String>)]) {
        for (key, value) in previous {
            let restored = match value {
                Some(value) => self.store.set(key, value).is_ok(),
                None => false,
            };
            if !restored {
                self.store.remove(key);
            }
        }
    }
}
