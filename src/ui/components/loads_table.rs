use crate::api::{Carrier, Load, Status};
use crate::ui::format::{format_date, format_price, format_weight};
use dioxus::prelude::*;

use super::status_badge::StatusBadge;

const COLUMN_TITLES: [&str; 8] = [
    "Load ID",
    "Origin",
    "Destination",
    "Status",
    "Date",
    "Weight",
    "Carrier",
    "Price",
];

/// The loads data grid
#[component]
pub fn LoadsTable(loads: Vec<Load>, statuses: Vec<Status>, carriers: Vec<Carrier>) -> Element {
    rsx! {
        div { class: "overflow-x-auto",
            table { class: "w-full",
                thead { class: "bg-gray-50 border-b-2 border-gray-200",
                    tr {
                        for title in COLUMN_TITLES {
                            th {
                                key: "{title}",
                                class: "px-4 py-3 text-left text-sm font-semibold text-gray-700",
                                "{title}"
                            }
                        }
                    }
                }
                tbody { class: "divide-y divide-gray-200",
                    for load in loads.iter() {
                        tr { key: "{load.id}", class: "hover:bg-gray-50 transition-colors",
                            td { class: "px-4 py-3 text-sm text-gray-900", "{load.id}" }
                            td { class: "px-4 py-3 text-sm text-gray-900", "{load.origin}" }
                            td { class: "px-4 py-3 text-sm text-gray-900", "{load.destination}" }
                            td { class: "px-4 py-3 text-sm",
                                StatusBadge { status: status_label(&statuses, load.status) }
                            }
                            td { class: "px-4 py-3 text-sm text-gray-900", {format_date(&load.date)} }
                            td { class: "px-4 py-3 text-sm text-gray-900", {format_weight(load.weight)} }
                            td { class: "px-4 py-3 text-sm text-gray-900",
                                {carrier_label(&carriers, load.carrier)}
                            }
                            td { class: "px-4 py-3 text-sm text-gray-900", {format_price(load.price)} }
                        }
                    }
                }
            }
        }
    }
}

/// Resolve a status id against the reference list, falling back to the raw
/// id when the list is missing or does not contain it.
fn status_label(statuses: &[Status], id: u32) -> String {
    statuses
        .iter()
        .find(|status| status.id == id)
        .map(|status| status.label.clone())
        .unwrap_or_else(|| id.to_string())
}

fn carrier_label(carriers: &[Carrier], id: u32) -> String {
    carriers
        .iter()
        .find(|carrier| carrier.id == id)
        .map(|carrier| carrier.label.clone())
        .unwrap_or_else(|| id.to_string())
}
