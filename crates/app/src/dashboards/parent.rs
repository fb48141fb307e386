use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{Card, CardContent, CardHeader, CardTitle};

use super::{DashboardPanel, Stat};

const MENU: &[&str] = &["Overview", "My Children", "Fees", "Reports", "Messages"];

const STATS: &[Stat] = &[
    ("Children", "2", "Form 1 and Form 3"),
    ("Balance", "$85.00", "Due 30 September"),
    ("Attendance", "96%", "This term"),
];

const NOTICES: &[&str] = &[
    "Consultation day is on Friday from 14:00",
    "Sports kit is required for inter-house athletics",
];

/// A guardian's view of their children's progress and fees.
#[component]
pub fn ParentDashboard() -> Element {
    rsx! {
        DashboardPanel {
            panel: Panel::Parent,
            title: "Family",
            menu: MENU.to_vec(),
            stats: STATS.to_vec(),
            Card {
                CardHeader {
                    CardTitle { "School notices" }
                }
                CardContent {
                    ul { class: "activity-list",
                        for notice in NOTICES {
                            li { "{notice}" }
                        }
                    }
                }
            }
        }
    }
}
