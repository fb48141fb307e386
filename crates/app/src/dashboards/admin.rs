use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::{DashboardPanel, Stat};

const MENU: &[&str] = &["Overview", "Students", "Staff", "Classes", "Reports", "Settings"];

const STATS: &[Stat] = &[
    ("Students", "1,248", "Enrolled this term"),
    ("Staff", "64", "Teaching and support"),
    ("Classes", "38", "Forms 1 to 6"),
    ("Fees collected", "82%", "Term 3 target"),
];

const ACTIVITY: &[&str] = &[
    "Term 3 timetable published",
    "Two new staff accounts awaiting approval",
    "Form 4 mock examination results uploaded",
];

/// School administrator overview.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        DashboardPanel {
            panel: Panel::Admin,
            title: "Administration",
            menu: MENU.to_vec(),
            stats: STATS.to_vec(),
            Card {
                CardHeader {
                    CardTitle { "Recent activity" }
                    CardDescription { "Across the whole school" }
                }
                CardContent {
                    ul { class: "activity-list",
                        for item in ACTIVITY {
                            li { "{item}" }
                        }
                    }
                }
            }
        }
    }
}
