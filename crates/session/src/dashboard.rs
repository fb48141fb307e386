use shared_types::{
    panel_for_role, Connectivity, ConnectivityBadge, Panel, PanelVisibility, Role,
};

/// Decides which panel is on screen and what the connectivity badges show.
///
/// After any `show_*` call exactly one panel is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityController {
    panels: PanelVisibility,
    connectivity: Connectivity,
}

impl VisibilityController {
    pub fn new(connectivity: Connectivity) -> Self {
        Self {
            panels: PanelVisibility::default(),
            connectivity,
        }
    }

    /// Hide every panel, the login form included.
    pub fn hide_all(&mut self) {
        self.panels.hide_all();
    }

    /// Reveal the dashboard for `role`, or the login form when the role is unknown.
    pub fn show_dashboard(&mut self, role: Option<Role>) -> Panel {
        let panel = panel_for_role(role);
        self.hide_all();
        self.panels.reveal(panel);
        tracing::debug!("Showing panel {}", panel.element_id());
        panel
    }

    /// [`show_dashboard`](Self::show_dashboard) for a raw role key.
    pub fn show_dashboard_for_key(&mut self, key: &str) -> Panel {
        self.show_dashboard(Role::from_key(key))
    }

    pub fn show_login_form(&mut self) {
        self.hide_all();
        self.panels.reveal(Panel::Login);
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.panels.is_visible(panel)
    }

    pub fn panels(&self) -> &PanelVisibility {
        &self.panels
    }

    /// Record a connectivity transition and return what every badge should now show.
    pub fn render_connectivity(&mut self, is_online: bool) -> ConnectivityBadge {
        self.connectivity = Connectivity::from_online(is_online);
        tracing::debug!("Connectivity changed: {:?}", self.connectivity);
        self.connectivity.badge()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn badge(&self) -> ConnectivityBadge {
        self.connectivity.badge()
    }
}
