use shared_types::AppError;

use super::KeyValueStore;

/// Store backed by the browser's `window.localStorage`.
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    /// Open `localStorage`. Returns `None` outside a browser window or when
    /// storage is disabled (some private browsing modes).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("localStorage is not accessible: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| AppError::storage(format!("localStorage rejected '{}': {:?}", key, e)))
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            tracing::warn!("Failed to remove '{}' from localStorage: {:?}", key, e);
        }
    }
}
