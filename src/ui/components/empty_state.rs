use dioxus::prelude::*;

/// Shown when a loads fetch succeeds but returns zero rows
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { class: "p-12 text-center",
            p { class: "text-gray-900 font-medium", "No loads found" }
            p { class: "text-sm text-gray-500 mt-1",
                "Try adjusting your search or filters."
            }
        }
    }
}
