use crate::shell::use_shell;
use dioxus::prelude::*;

/// Reports the initial `navigator.onLine` value, then one value per
/// `online`/`offline` window event.
const LISTENER_JS: &str = r#"
    dioxus.send(navigator.onLine);
    window.addEventListener("online", () => dioxus.send(true));
    window.addEventListener("offline", () => dioxus.send(false));
"#;

/// Headless component that mirrors browser connectivity into the shell so
/// every badge follows the latest online/offline transition.
///
/// Mount once at the app root.
#[component]
pub fn ConnectivityListener() -> Element {
    let mut shell = use_shell();

    use_coroutine(move |_: UnboundedReceiver<()>| async move {
        let mut events = document::eval(LISTENER_JS);
        loop {
            match events.recv::<bool>().await {
                Ok(is_online) => {
                    tracing::info!("Connectivity: {}", if is_online { "online" } else { "offline" });
                    shell.render_connectivity(is_online);
                }
                Err(e) => {
                    tracing::warn!("Connectivity listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    // Headless
    rsx! {}
}
