use crate::api::{Carrier, Status};
use dioxus::prelude::*;

/// Search input plus status and carrier dropdowns.
///
/// Filter values live in the URL, so this component is fully controlled:
/// every change is reported upward and flows back in as props.
#[component]
pub fn FilterBar(
    search_term: String,
    selected_status: Option<u32>,
    selected_carrier: Option<u32>,
    statuses: Vec<Status>,
    carriers: Vec<Carrier>,
    on_search_change: EventHandler<String>,
    on_status_change: EventHandler<Option<u32>>,
    on_carrier_change: EventHandler<Option<u32>>,
) -> Element {
    rsx! {
        div { class: "p-4 border-b border-gray-200",
            div { class: "flex flex-wrap gap-3",
                input {
                    r#type: "text",
                    placeholder: "Search by Load ID, Origin, or Destination...",
                    autofocus: true,
                    value: "{search_term}",
                    oninput: move |event| on_search_change.call(event.value()),
                    class: "flex-1 min-w-[250px] px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent cursor-pointer",
                    onchange: move |event| on_status_change.call(event.value().parse::<u32>().ok()),
                    option { value: "", selected: selected_status.is_none(), "All Statuses" }
                    for status in statuses.iter() {
                        option {
                            key: "{status.id}",
                            value: "{status.id}",
                            selected: selected_status == Some(status.id),
                            "{status.label}"
                        }
                    }
                }
                select {
                    class: "px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent cursor-pointer",
                    onchange: move |event| on_carrier_change.call(event.value().parse::<u32>().ok()),
                    option { value: "", selected: selected_carrier.is_none(), "All Carriers" }
                    for carrier in carriers.iter() {
                        option {
                            key: "{carrier.id}",
                            value: "{carrier.id}",
                            selected: selected_carrier == Some(carrier.id),
                            "{carrier.label}"
                        }
                    }
                }
            }
        }
    }
}
