use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::filters::LoadFilters;
use crate::ui::api_context::ApiProvider;
use crate::ui::components::LoadBoard;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

// The whole filter state rides in the query string, so a single route with a
// catch-all query segment covers every view the board can show.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
    #[route("/?:..filters")]
    LoadBoard { filters: LoadFilters },
}

const HISTORY_BUTTON_CLASS: &str = "px-3 py-1 text-sm text-gray-600 bg-white border border-gray-300 rounded-md hover:bg-gray-50 cursor-pointer";

/// Page chrome: heading, history controls and the routed content
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50",
            div { class: "max-w-7xl mx-auto px-4 py-8",
                div { class: "flex items-center justify-between mb-6",
                    h1 { class: "text-3xl font-bold text-gray-900", "Shipping Loads" }
                    // Every filter edit pushes a history entry, so back and
                    // forward walk through previous filter states.
                    div { class: "flex gap-2",
                        button {
                            class: HISTORY_BUTTON_CLASS,
                            onclick: move |_| {
                                navigator().go_back();
                            },
                            "Back"
                        }
                        button {
                            class: HISTORY_BUTTON_CLASS,
                            onclick: move |_| {
                                navigator().go_forward();
                            },
                            "Forward"
                        }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}

/// Application root: stylesheets, context providers and the router
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ApiProvider {
            Router::<Route> {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Load Board")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
