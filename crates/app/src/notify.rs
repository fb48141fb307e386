use dioxus::prelude::*;

/// Build the script for a blocking browser alert. The message is JSON-quoted
/// so quotes and newlines survive.
fn alert_script(message: &str) -> String {
    let quoted = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("alert({quoted});")
}

/// Show a modal alert with `message`.
pub fn alert(message: &str) {
    tracing::debug!("alert: {}", message);
    let _ = document::eval(&alert_script(message));
}
