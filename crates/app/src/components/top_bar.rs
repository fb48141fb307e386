use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdGraduationCap, LdLogIn, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::components::{Button, ButtonVariant};

use crate::shell::use_shell;

/// App header with the brand and the login/logout button.
#[component]
pub fn TopBar() -> Element {
    let mut shell = use_shell();
    let session = shell.session();
    let label = shell.login_button_label();
    let signed_in = session.is_some();

    rsx! {
        header { class: "top-bar",
            div { class: "brand",
                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 22, height: 22 }
                span { "ChikoroPro" }
            }
            div { class: "top-bar-actions",
                if let Some(s) = session {
                    span { class: "user-chip", title: "{s.email}",
                        span { class: "user-initials", "{s.initials()}" }
                        span { class: "user-name", "{s.display_name}" }
                    }
                }
                Button {
                    id: "loginBtn",
                    variant: if signed_in { ButtonVariant::Outline } else { ButtonVariant::Primary },
                    onclick: move |_| shell.toggle_login_form(),
                    if signed_in {
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    } else {
                        Icon::<LdLogIn> { icon: LdLogIn, width: 16, height: 16 }
                    }
                    "{label}"
                }
            }
        }
    }
}
