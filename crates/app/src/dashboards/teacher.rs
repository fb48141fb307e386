use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::{DashboardPanel, Stat};

const MENU: &[&str] = &["Overview", "My Classes", "Attendance", "Marks", "Timetable"];

const STATS: &[Stat] = &[
    ("Classes", "5", "Mathematics"),
    ("Learners", "186", ""),
    ("Marking", "42", "Scripts outstanding"),
];

/// (time, class, room)
const TODAY: &[(&str, &str, &str)] = &[
    ("07:30", "Form 2B Mathematics", "Block C2"),
    ("09:10", "Form 4A Mathematics", "Block C4"),
    ("11:40", "Form 6 Pure Mathematics", "Lab 1"),
];

/// Lesson plan and marking load for a class teacher.
#[component]
pub fn TeacherDashboard() -> Element {
    rsx! {
        DashboardPanel {
            panel: Panel::Teacher,
            title: "My Teaching",
            menu: MENU.to_vec(),
            stats: STATS.to_vec(),
            Card {
                CardHeader {
                    CardTitle { "Today's lessons" }
                    CardDescription { "Tap a lesson to take attendance" }
                }
                CardContent {
                    ul { class: "schedule-list",
                        for (time, class, room) in TODAY.iter().copied() {
                            li { key: "{time}",
                                span { class: "schedule-time", "{time}" }
                                span { "{class}" }
                                span { class: "schedule-room", "{room}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
