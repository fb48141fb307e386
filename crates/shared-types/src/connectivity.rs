use serde::{Deserialize, Serialize};

/// Browser-reported network reachability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Online,
    Offline,
}

impl Connectivity {
    pub fn from_online(is_online: bool) -> Self {
        if is_online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Connectivity::Online)
    }

    /// View model for a connectivity badge in this state.
    pub fn badge(&self) -> ConnectivityBadge {
        match self {
            Connectivity::Online => ConnectivityBadge {
                class: "online",
                icon: "cloud_done",
                label: "Online",
            },
            Connectivity::Offline => ConnectivityBadge {
                class: "offline",
                icon: "cloud_off",
                label: "Offline",
            },
        }
    }
}

/// What every connectivity badge renders: a state class, an icon name and a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityBadge {
    pub class: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}
