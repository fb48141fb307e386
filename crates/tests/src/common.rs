use session::{DashboardShell, KeyValueStore, MemoryStore, SessionController};
use shared_types::{AppError, Connectivity, Role, CURRENT_USER_KEY, USER_ROLE_KEY};

/// A `currentUser` record as the browser app writes it.
pub fn stored_user_json(email: &str, display_name: &str) -> String {
    serde_json::json!({
        "email": email,
        "displayName": display_name,
        "uid": "user_seeded",
        "photoURL": null,
        "emailVerified": true,
    })
    .to_string()
}

/// Storage pre-populated with a signed-in user.
pub fn seeded_store(email: &str, role: &str) -> MemoryStore {
    let display_name = shared_types::display_name_for_key(role);
    MemoryStore::with_entries([
        (CURRENT_USER_KEY.to_string(), stored_user_json(email, display_name)),
        (USER_ROLE_KEY.to_string(), role.to_string()),
    ])
}

pub fn controller() -> SessionController<MemoryStore> {
    SessionController::new(MemoryStore::new())
}

/// A started shell over empty storage.
pub fn fresh_shell() -> DashboardShell<MemoryStore> {
    let mut shell = DashboardShell::new(MemoryStore::new(), Connectivity::Online);
    shell.start();
    shell
}

/// Sign in with throwaway credentials, panicking on failure.
pub fn sign_in(shell: &mut DashboardShell<MemoryStore>, role: Role) {
    shell
        .login("someone@school.ac.zw", "secret", role)
        .expect("login with non-blank credentials should succeed");
}

/// Storage that refuses writes to the listed keys, like a browser whose
/// quota runs out partway through. `None` rejects every key.
pub struct RejectingStore {
    pub inner: MemoryStore,
    pub rejected: Option<Vec<&'static str>>,
}

impl RejectingStore {
    /// Reject every write.
    pub fn full() -> Self {
        Self {
            inner: MemoryStore::new(),
            rejected: None,
        }
    }

    /// Accept everything until `reject` is called.
    pub fn accepting() -> Self {
        Self {
            inner: MemoryStore::new(),
            rejected: Some(Vec::new()),
        }
    }

    pub fn reject(&mut self, key: &'static str) {
        if let Some(keys) = self.rejected.as_mut() {
            keys.push(key);
        }
    }

    fn rejects(&self, key: &str) -> bool {
        match &self.rejected {
            None => true,
            Some(keys) => keys.iter().any(|k| *k == key),
        }
    }
}

impl KeyValueStore for RejectingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.rejects(key) {
            return Err(AppError::storage("QuotaExceededError"));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.inner.remove(key);
    }
}
