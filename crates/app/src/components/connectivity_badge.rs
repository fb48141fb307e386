use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCloud, LdCloudOff};
use dioxus_free_icons::Icon;
use shared_types::{ConnectivityBadge, FeatureFlags};
use shared_ui::components::{Badge, BadgeVariant};

use crate::shell::use_shell;

fn badge_variant(badge: &ConnectivityBadge) -> BadgeVariant {
    if badge.class == "online" {
        BadgeVariant::Success
    } else {
        BadgeVariant::Warning
    }
}

/// Online/offline indicator. Every instance shows the same state.
#[component]
pub fn ConnectivityStatus() -> Element {
    let flags = use_context::<FeatureFlags>();
    let shell = use_shell();

    if !flags.connectivity_badge {
        return rsx! {};
    }

    let badge = shell.badge();
    let online = badge.class == "online";

    rsx! {
        Badge {
            variant: badge_variant(&badge),
            class: "connection-status {badge.class}",
            if online {
                Icon::<LdCloud> { icon: LdCloud, width: 14, height: 14 }
            } else {
                Icon::<LdCloudOff> { icon: LdCloudOff, width: 14, height: 14 }
            }
            span { "{badge.label}" }
        }
    }
}
