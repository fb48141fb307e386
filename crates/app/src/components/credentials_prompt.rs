use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::components::{
    Button, ButtonVariant, DialogActions, DialogContent, DialogDescription, DialogRoot,
    DialogTitle, Input,
};

use crate::notify;
use crate::shell::use_shell;

/// First-run prompt for the school's service credentials.
///
/// Shown while any credential is still a demo placeholder. "Skip for Demo"
/// closes it for this run only; the demo values stay in effect.
#[component]
pub fn CredentialsPrompt() -> Element {
    let flags = use_context::<FeatureFlags>();
    let mut shell = use_shell();
    let mut open = use_signal(|| flags.credentials_prompt && shell.needs_credentials());

    let mut api_key = use_signal(String::new);
    let mut project_id = use_signal(String::new);
    let mut app_id = use_signal(String::new);

    let save = move |_: MouseEvent| {
        let result = shell.set_credentials(&api_key.read(), &project_id.read(), &app_id.read());
        match result {
            Ok(_) => open.set(false),
            Err(e) => notify::alert(&e.message),
        }
    };

    rsx! {
        DialogRoot {
            open: open(),
            on_open_change: move |v: bool| open.set(v),
            DialogContent {
                DialogTitle { "Connect your school" }
                DialogDescription {
                    "Enter the Firebase settings for your school, or skip to try the demo."
                }
                Input {
                    label: "API key",
                    value: api_key(),
                    on_input: move |e: FormEvent| api_key.set(e.value()),
                }
                Input {
                    label: "Project ID",
                    value: project_id(),
                    on_input: move |e: FormEvent| project_id.set(e.value()),
                }
                Input {
                    label: "App ID",
                    value: app_id(),
                    on_input: move |e: FormEvent| app_id.set(e.value()),
                }
                DialogActions {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            tracing::info!("Credentials prompt skipped; using demo values");
                            open.set(false);
                        },
                        "Skip for Demo"
                    }
                    Button { variant: ButtonVariant::Primary, onclick: save, "Save" }
                }
            }
        }
    }
}
