use crate::api::Pagination;
use dioxus::prelude::*;

const BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-md hover:bg-gray-50 disabled:opacity-50 disabled:cursor-not-allowed transition-colors cursor-pointer";

/// Previous/next page controls driven by server paging metadata
#[component]
pub fn PaginationControls(pagination: Pagination, on_page_change: EventHandler<u32>) -> Element {
    let page = pagination.page;
    rsx! {
        div { class: "flex items-center justify-center gap-4 p-4 border-t border-gray-200",
            button {
                class: BUTTON_CLASS,
                disabled: !pagination.has_previous_page,
                onclick: move |_| on_page_change.call(page.saturating_sub(1)),
                "Previous"
            }
            span { class: "text-sm text-gray-600 min-w-[120px] text-center",
                "Page {pagination.page} of {pagination.total_pages}"
            }
            button {
                class: BUTTON_CLASS,
                disabled: !pagination.has_next_page,
                onclick: move |_| on_page_change.call(page + 1),
                "Next"
            }
        }
    }
}
