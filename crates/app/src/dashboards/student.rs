use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

use super::{DashboardPanel, Stat};

const MENU: &[&str] = &["Overview", "Timetable", "Homework", "Results", "Library"];

const STATS: &[Stat] = &[
    ("Homework due", "3", "This week"),
    ("Average", "71%", "Last assessment"),
    ("Books out", "2", "Return by Friday"),
];

/// (subject, task, submitted)
const HOMEWORK: &[(&str, &str, bool)] = &[
    ("Mathematics", "Exercise 7B, questions 1 to 12", false),
    ("Geography", "Map work: Zambezi basin", false),
    ("English", "Composition draft", true),
];

/// A learner's homework and results.
#[component]
pub fn StudentDashboard() -> Element {
    rsx! {
        DashboardPanel {
            panel: Panel::Student,
            title: "My Learning",
            menu: MENU.to_vec(),
            stats: STATS.to_vec(),
            Card {
                CardHeader {
                    CardTitle { "Homework" }
                }
                CardContent {
                    ul { class: "activity-list",
                        for (subject, task, submitted) in HOMEWORK.iter().copied() {
                            li { key: "{subject}",
                                strong { "{subject}: " }
                                span { "{task} " }
                                if submitted {
                                    Badge { variant: BadgeVariant::Success, "Submitted" }
                                } else {
                                    Badge { variant: BadgeVariant::Outline, "Due" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
