use dioxus::prelude::*;
use shared_types::MenuSelection;

/// Sidebar menu where exactly one item is active. The first item starts active.
#[component]
pub fn MenuList(items: Vec<&'static str>) -> Element {
    let mut selection = use_signal(MenuSelection::default);

    rsx! {
        ul { class: "menu-list",
            for (index, item) in items.iter().enumerate() {
                li {
                    key: "{item}",
                    class: if selection.read().is_active(index) { "menu-item active" } else { "menu-item" },
                    onclick: move |_| selection.write().select(index),
                    "{item}"
                }
            }
        }
    }
}
