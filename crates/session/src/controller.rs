use shared_types::{
    AppError, LoginRequest, Role, Session, StoredUser, CURRENT_USER_KEY, USER_ROLE_KEY,
};
use validator::Validate;

use crate::storage::KeyValueStore;
use crate::uid::generate_uid;

/// Message shown when the login form is submitted with a blank field.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please enter both email and password";

/// Owns login/logout transitions and the persisted session.
///
/// The in-memory session is only set after both storage keys were written,
/// and is always cleared together with them, so `is_active` never disagrees
/// with what a reload would restore.
pub struct SessionController<S> {
    store: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Wrap a store. No session is active until [`restore`](Self::restore) or a login.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Mock sign-in. Blank email or password is a `ValidationError` and
    /// changes nothing; anything else succeeds for the chosen role.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Session, AppError> {
        let request = LoginRequest::new(email, password, role);
        request
            .validate()
            .map_err(|e| AppError::from(e).with_message(LOGIN_REQUIRED_MESSAGE))?;

        let session = Session::new(request.email, generate_uid(), request.role);
        self.persist(&session)?;

        tracing::info!("Signed in {} as {}", session.email, session.role);
        self.current = Some(session.clone());
        Ok(session)
    }

    /// Clear the session from memory and storage. Safe to call when signed out.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!("Signed out {}", session.email);
        }
        self.clear_persisted();
    }

    /// Read the persisted session without touching memory or storage.
    ///
    /// A missing `userRole` next to a valid user defaults to `student`.
    /// Unparseable user JSON or an unknown role key is `CorruptState`.
    pub fn load(&self) -> Result<Option<Session>, AppError> {
        let Some(raw) = self.store.get(CURRENT_USER_KEY) else {
            return Ok(None);
        };
        let user: StoredUser = serde_json::from_str(&raw)?;
        let role = match self.store.get(USER_ROLE_KEY) {
            None => Role::Student,
            Some(key) => Role::from_key(&key).ok_or_else(|| {
                AppError::corrupt_state(format!("Unknown stored role '{}'", key))
            })?,
        };
        Ok(Some(Session::from_stored(user, role)))
    }

    /// Rehydrate the session at startup.
    ///
    /// Corrupt data is cleared from storage and treated as signed out.
    pub fn restore(&mut self) -> Option<Session> {
        match self.load() {
            Ok(Some(session)) => {
                tracing::info!("Restored session for {} ({})", session.email, session.role);
                self.current = Some(session.clone());
                Some(session)
            }
            Ok(None) => {
                if self.store.contains(USER_ROLE_KEY) {
                    tracing::debug!("Dropping orphaned {} entry", USER_ROLE_KEY);
                    self.store.remove(USER_ROLE_KEY);
                }
                self.current = None;
                None
            }
            Err(e) => {
                tracing::warn!("Error parsing saved user, clearing session: {}", e);
                self.clear_persisted();
                self.current = None;
                None
            }
        }
    }

    /// Write both keys or neither. On a failed role write the previous
    /// `currentUser` is put back; if even that fails, memory and storage are
    /// both cleared so they still agree.
    fn persist(&mut self, session: &Session) -> Result<(), AppError> {
        let json = serde_json::to_string(&session.to_stored())
            .map_err(|e| AppError::storage(format!("Failed to serialize user: {}", e)))?;
        let previous_user = self.store.get(CURRENT_USER_KEY);
        self.store.set(CURRENT_USER_KEY, &json)?;
        if let Err(e) = self.store.set(USER_ROLE_KEY, session.role.as_str()) {
            tracing::warn!("Failed to store {}, rolling back: {}", USER_ROLE_KEY, e);
            let restored = match previous_user {
                Some(previous) => self.store.set(CURRENT_USER_KEY, &previous).is_ok(),
                None => {
                    self.store.remove(CURRENT_USER_KEY);
                    true
                }
            };
            if !restored {
                tracing::warn!("Could not restore previous session, signing out");
                self.current = None;
                self.clear_persisted();
            }
            return Err(e);
        }
        Ok(())
    }

    fn clear_persisted(&mut self) {
        self.store.remove(CURRENT_USER_KEY);
        self.store.remove(USER_ROLE_KEY);
    }
}
