pub mod admin;
pub mod clerk;
pub mod parent;
pub mod student;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{PageActions, PageHeader, PageSubtitle, PageTitle, StatCard};

use crate::components::{ConnectivityStatus, MenuList};
use crate::shell::use_shell;

/// A headline number on a dashboard: (label, value, hint).
pub type Stat = (&'static str, &'static str, &'static str);

/// All role dashboards. They stay mounted; the shell decides which one shows.
#[component]
pub fn Dashboards() -> Element {
    rsx! {
        admin::AdminDashboard {}
        clerk::ClerkDashboard {}
        teacher::TeacherDashboard {}
        parent::ParentDashboard {}
        student::StudentDashboard {}
    }
}

/// Common frame for a role dashboard: menu, header with greeting and
/// connectivity badge, and the headline stats.
#[component]
fn DashboardPanel(
    panel: Panel,
    title: &'static str,
    menu: Vec<&'static str>,
    stats: Vec<Stat>,
    children: Element,
) -> Element {
    let shell = use_shell();
    let visible = shell.is_visible(panel);
    let greeting = shell
        .session()
        .map(|s| format!("Welcome back, {}", s.display_name))
        .unwrap_or_default();

    rsx! {
        section {
            id: panel.element_id(),
            class: if visible { "panel dashboard" } else { "panel dashboard hidden" },
            aside { class: "dashboard-sidebar",
                MenuList { items: menu }
            }
            div { class: "dashboard-main",
                PageHeader {
                    div {
                        PageTitle { "{title}" }
                        PageSubtitle { "{greeting}" }
                    }
                    PageActions {
                        ConnectivityStatus {}
                    }
                }
                div { class: "stats-grid",
                    for (label, value, hint) in stats {
                        StatCard {
                            key: "{label}",
                            label: label,
                            value: value,
                            hint: hint,
                        }
                    }
                }
                {children}
            }
        }
    }
}
