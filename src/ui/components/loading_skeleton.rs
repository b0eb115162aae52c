use dioxus::prelude::*;

const SKELETON_COLUMNS: usize = 8;
const SKELETON_ROWS: usize = 10;

/// Pulsing placeholder mirroring the filter bar, table and pagination layout.
/// Shown only before the first page of loads has arrived.
#[component]
pub fn LoadingSkeleton() -> Element {
    rsx! {
        div { class: "bg-white rounded-lg shadow overflow-hidden",
            div { class: "p-4 border-b border-gray-200",
                div { class: "flex flex-wrap gap-3",
                    div { class: "flex-1 min-w-[250px] h-10 bg-gray-200 rounded-md animate-pulse" }
                    div { class: "w-40 h-10 bg-gray-200 rounded-md animate-pulse" }
                    div { class: "w-40 h-10 bg-gray-200 rounded-md animate-pulse" }
                }
            }
            div { class: "overflow-x-auto",
                table { class: "w-full",
                    thead { class: "bg-gray-50 border-b-2 border-gray-200",
                        tr {
                            for col in 0..SKELETON_COLUMNS {
                                th { key: "{col}", class: "px-4 py-3 text-left",
                                    div { class: "h-4 bg-gray-300 rounded w-20 animate-pulse" }
                                }
                            }
                        }
                    }
                    tbody { class: "divide-y divide-gray-200",
                        for row in 0..SKELETON_ROWS {
                            tr { key: "{row}",
                                for col in 0..SKELETON_COLUMNS {
                                    td { key: "{col}", class: "px-4 py-3",
                                        div { class: "h-4 bg-gray-200 rounded animate-pulse" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "flex items-center justify-center gap-4 p-4 border-t border-gray-200",
                div { class: "w-20 h-10 bg-gray-200 rounded-md animate-pulse" }
                div { class: "w-32 h-4 bg-gray-200 rounded animate-pulse" }
                div { class: "w-20 h-10 bg-gray-200 rounded-md animate-pulse" }
            }
        }
    }
}
