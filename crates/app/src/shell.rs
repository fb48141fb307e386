use dioxus::prelude::*;
use session::{DashboardShell, KeyValueStore, MemoryStore};
use shared_types::{
    AppError, Connectivity, ConnectivityBadge, Panel, Role, ServiceCredentials, Session,
};

/// Storage backing the shell at runtime.
pub type AppStore = Box<dyn KeyValueStore>;

/// Global dashboard shell state.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub shell: Signal<DashboardShell<AppStore>>,
}

impl ShellState {
    /// Open storage and restore any persisted session.
    pub fn new() -> Self {
        let mut shell = DashboardShell::new(open_store(), Connectivity::Online);
        shell.start();
        Self {
            shell: Signal::new(shell),
        }
    }

    pub fn login(&mut self, email: &str, password: &str, role: Role) -> Result<Session, AppError> {
        self.shell.write().login(email, password, role)
    }

    pub fn toggle_login_form(&mut self) {
        self.shell.write().toggle_login_form();
    }

    pub fn render_connectivity(&mut self, is_online: bool) {
        // Skip the write when nothing changed so badges don't re-render.
        if self.shell.peek().view().connectivity().is_online() != is_online {
            self.shell.write().render_connectivity(is_online);
        }
    }

    pub fn set_credentials(
        &mut self,
        api_key: &str,
        project_id: &str,
        app_id: &str,
    ) -> Result<ServiceCredentials, AppError> {
        self.shell
            .write()
            .credentials()
            .set_credentials(api_key, project_id, app_id)
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.shell.read().view().is_visible(panel)
    }

    pub fn badge(&self) -> ConnectivityBadge {
        self.shell.read().view().badge()
    }

    pub fn session(&self) -> Option<Session> {
        self.shell.read().current_session().cloned()
    }

    pub fn login_button_label(&self) -> &'static str {
        self.shell.read().login_button_label()
    }

    pub fn needs_credentials(&self) -> bool {
        !self.shell.read().service_credentials().is_configured()
    }
}

/// Hook to access the shell state.
pub fn use_shell() -> ShellState {
    use_context::<ShellState>()
}

#[cfg(feature = "web")]
fn open_store() -> AppStore {
    match session::LocalStore::open() {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("localStorage unavailable; sessions will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(feature = "web"))]
fn open_store() -> AppStore {
    tracing::info!("Using in-memory session storage");
    Box::new(MemoryStore::new())
}
