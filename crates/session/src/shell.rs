use shared_types::{
    AppError, Connectivity, ConnectivityBadge, Panel, Role, ServiceCredentials, Session, UiState,
};

use crate::controller::SessionController;
use crate::credentials::CredentialsStore;
use crate::dashboard::VisibilityController;
use crate::storage::KeyValueStore;

/// The whole dashboard shell state: session plus panel and badge visibility.
///
/// All UI mutation goes through these methods; the rendering layer only
/// reads [`view`](Self::view) and [`state`](Self::state).
pub struct DashboardShell<S> {
    session: SessionController<S>,
    view: VisibilityController,
}

impl<S: KeyValueStore> DashboardShell<S> {
    pub fn new(store: S, connectivity: Connectivity) -> Self {
        Self {
            session: SessionController::new(store),
            view: VisibilityController::new(connectivity),
        }
    }

    /// Resolve the startup state from storage and show the matching dashboard.
    /// Without a session every panel stays hidden until the login button is used.
    pub fn start(&mut self) -> UiState {
        match self.session.restore() {
            Some(session) => {
                self.view.show_dashboard(Some(session.role));
            }
            None => self.view.hide_all(),
        }
        self.state()
    }

    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Session, AppError> {
        let session = self.session.login(email, password, role)?;
        self.view.show_dashboard(Some(session.role));
        Ok(session)
    }

    /// Sign out and return to the login form.
    pub fn logout(&mut self) {
        self.session.logout();
        self.view.show_login_form();
    }

    /// The login button: signs out when a session is active, otherwise opens the form.
    pub fn toggle_login_form(&mut self) {
        if self.session.is_active() {
            self.logout();
        } else {
            self.view.show_login_form();
        }
    }

    pub fn show_dashboard(&mut self, role: Option<Role>) -> Panel {
        self.view.show_dashboard(role)
    }

    pub fn hide_all(&mut self) {
        self.view.hide_all();
    }

    pub fn render_connectivity(&mut self, is_online: bool) -> ConnectivityBadge {
        self.view.render_connectivity(is_online)
    }

    pub fn state(&self) -> UiState {
        match self.session.current() {
            Some(session) => UiState::LoggedIn(session.role),
            None => UiState::LoggedOut,
        }
    }

    pub fn login_button_label(&self) -> &'static str {
        if self.session.is_active() {
            "Logout"
        } else {
            "Login"
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.session.current()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn view(&self) -> &VisibilityController {
        &self.view
    }

    /// Stored service credentials, with demo placeholders for missing values.
    pub fn service_credentials(&self) -> ServiceCredentials {
        CredentialsStore::<S>::read_from(self.session.store())
    }

    /// Credentials access over the same store as the session.
    pub fn credentials(&mut self) -> CredentialsStore<&mut S> {
        CredentialsStore::new(self.session.store_mut())
    }

    pub fn store(&self) -> &S {
        self.session.store()
    }

    pub fn into_store(self) -> S {
        self.session.into_store()
    }
}
