use dioxus::prelude::*;

/// Full-view error shown when the loads fetch fails
#[component]
pub fn ErrorState(message: String) -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow p-12 text-center",
            div { class: "text-red-600", "Error: {message}" }
        }
    }
}
