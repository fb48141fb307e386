use dioxus::prelude::*;
use shared_types::Panel;
use shared_ui::components::{Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle};

use super::{DashboardPanel, Stat};

const MENU: &[&str] = &["Overview", "Fees", "Enrolment", "Records", "Reports"];

const STATS: &[Stat] = &[
    ("Payments today", "23", "Cash and mobile money"),
    ("Outstanding", "$14,320", "Across 211 accounts"),
    ("New enrolments", "9", "This week"),
];

/// (receipt, student, amount, cleared)
const PAYMENTS: &[(&str, &str, &str, bool)] = &[
    ("R-1042", "Nyasha M.", "$120.00", true),
    ("R-1043", "Tinashe K.", "$60.00", true),
    ("R-1044", "Rudo C.", "$95.00", false),
];

/// Bursar's office view of fees and enrolment.
#[component]
pub fn ClerkDashboard() -> Element {
    rsx! {
        DashboardPanel {
            panel: Panel::Clerk,
            title: "Bursary",
            menu: MENU.to_vec(),
            stats: STATS.to_vec(),
            Card {
                CardHeader {
                    CardTitle { "Latest payments" }
                }
                CardContent {
                    table { class: "simple-table",
                        thead {
                            tr {
                                th { "Receipt" }
                                th { "Student" }
                                th { "Amount" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for (receipt, student, amount, cleared) in PAYMENTS.iter().copied() {
                                tr { key: "{receipt}",
                                    td { "{receipt}" }
                                    td { "{student}" }
                                    td { "{amount}" }
                                    td {
                                        if cleared {
                                            Badge { variant: BadgeVariant::Success, "Cleared" }
                                        } else {
                                            Badge { variant: BadgeVariant::Warning, "Pending" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
