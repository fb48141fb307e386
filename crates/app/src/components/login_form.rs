use dioxus::prelude::*;
use shared_types::{AppError, Panel, Role, ALL_ROLES};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect,
    Input,
};

use crate::notify;
use crate::shell::use_shell;

/// Error message recorded for `field`, if any.
fn field_error(err: &Option<AppError>, field: &str) -> Option<String> {
    err.as_ref().and_then(|e| e.field_errors.get(field).cloned())
}

/// Mock sign-in form. Any non-blank email and password is accepted for the
/// chosen role.
#[component]
pub fn LoginForm() -> Element {
    let mut shell = use_shell();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Admin);
    let mut error = use_signal(|| None::<AppError>);

    let visible = shell.is_visible(Panel::Login);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = shell.login(&email.read(), &password.read(), *role.read());
        match result {
            Ok(_) => {
                error.set(None);
                email.set(String::new());
                password.set(String::new());
            }
            Err(e) => {
                notify::alert(&e.message);
                error.set(Some(e));
            }
        }
    };

    rsx! {
        section {
            id: Panel::Login.element_id(),
            class: if visible { "panel login-panel" } else { "panel login-panel hidden" },
            Card {
                CardHeader {
                    CardTitle { "Sign in to ChikoroPro" }
                    CardDescription { "Choose your role to open the matching dashboard." }
                }
                CardContent {
                    form { class: "login-form", onsubmit: submit,
                        Input {
                            id: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "you@school.ac.zw",
                            value: email(),
                            error: field_error(&error.read(), "email"),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            id: "password",
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            error: field_error(&error.read(), "password"),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        FormSelect {
                            id: "role",
                            label: "Role",
                            value: role.read().as_str().to_string(),
                            onchange: move |e: Event<FormData>| {
                                if let Some(r) = Role::from_key(&e.value()) {
                                    role.set(r);
                                }
                            },
                            for r in ALL_ROLES.iter() {
                                option { value: r.as_str(), "{r.label()}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            button_type: "submit",
                            block: true,
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
