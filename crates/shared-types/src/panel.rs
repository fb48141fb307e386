use serde::{Deserialize, Serialize};

use crate::models::Role;

/// A page region that is shown or hidden as a whole.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Panel {
    Login,
    Admin,
    Clerk,
    Teacher,
    Parent,
    Student,
}

/// Every panel, login first.
pub const ALL_PANELS: &[Panel] = &[
    Panel::Login,
    Panel::Admin,
    Panel::Clerk,
    Panel::Teacher,
    Panel::Parent,
    Panel::Student,
];

impl Panel {
    /// Element id of the panel container.
    pub fn element_id(&self) -> &'static str {
        match self {
            Panel::Login => "loginForm",
            Panel::Admin => "adminDashboard",
            Panel::Clerk => "clerkDashboard",
            Panel::Teacher => "teacherDashboard",
            Panel::Parent => "parentDashboard",
            Panel::Student => "studentDashboard",
        }
    }

    fn index(&self) -> usize {
        match self {
            Panel::Login => 0,
            Panel::Admin => 1,
            Panel::Clerk => 2,
            Panel::Teacher => 3,
            Panel::Parent => 4,
            Panel::Student => 5,
        }
    }
}

impl From<Role> for Panel {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Panel::Admin,
            Role::Clerk => Panel::Clerk,
            Role::Teacher => Panel::Teacher,
            Role::Parent => Panel::Parent,
            Role::Student => Panel::Student,
        }
    }
}

/// Decide which panel to reveal for a role. Unrecognized roles get the login panel.
pub fn panel_for_role(role: Option<Role>) -> Panel {
    role.map(Panel::from).unwrap_or(Panel::Login)
}

/// Same as [`panel_for_role`] for a raw role key.
pub fn panel_for_key(key: &str) -> Panel {
    panel_for_role(Role::from_key(key))
}

/// Hidden/visible flag per panel. Starts with everything hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    visible: [bool; 6],
}

impl PanelVisibility {
    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible[panel.index()]
    }

    pub fn hide_all(&mut self) {
        self.visible = [false; 6];
    }

    pub fn reveal(&mut self, panel: Panel) {
        self.visible[panel.index()] = true;
    }

    /// Panels currently visible, in [`ALL_PANELS`] order.
    pub fn visible_panels(&self) -> Vec<Panel> {
        ALL_PANELS
            .iter()
            .copied()
            .filter(|p| self.is_visible(*p))
            .collect()
    }

    /// The single visible panel, if exactly one is visible.
    pub fn active(&self) -> Option<Panel> {
        match self.visible_panels().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
