use crate::api::{Carrier, Load, LoadsQuery, Pagination, Status};
use crate::config::Config;
use crate::filters::LoadFilters;
use crate::ui::api_context::use_loads_client;
use crate::ui::Route;
use dioxus::prelude::*;

use super::empty_state::EmptyState;
use super::error_state::ErrorState;
use super::filter_bar::FilterBar;
use super::loading_skeleton::LoadingSkeleton;
use super::loads_table::LoadsTable;
use super::pagination::PaginationControls;
use super::search_hooks::{use_debounced, GenerationCounter};

/// Rows requested per page
const PAGE_SIZE: u32 = 10;

/// What the board shows for the current fetch state
#[derive(Debug, Clone, PartialEq)]
enum ViewState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

/// Pick the view for the current fetch state. The skeleton only appears
/// while no rows have ever been shown; once data is on screen, a fetch in
/// flight keeps the existing table visible until it resolves.
fn view_state(loading: bool, error: Option<&str>, row_count: usize) -> ViewState {
    if loading && row_count == 0 {
        ViewState::Loading
    } else if let Some(message) = error {
        ViewState::Error(message.to_string())
    } else if row_count == 0 {
        ViewState::Empty
    } else {
        ViewState::Populated
    }
}

/// The loads board: filter bar, data grid and pagination, driven entirely by
/// the URL-carried [`LoadFilters`]. Filter edits navigate to a new route, the
/// router updates `filters` in place, and the fetch effects react to that.
#[component]
pub fn LoadBoard(filters: ReadSignal<LoadFilters>) -> Element {
    let client = use_loads_client();
    let config = use_context::<Config>();

    // Field-level memos so the fetch effect keys off values rather than the
    // LoadFilters allocation the router hands over on every navigation.
    let page = use_memo(move || filters().page);
    let status = use_memo(move || filters().status);
    let carrier = use_memo(move || filters().carrier);
    let search = use_memo(move || filters().search);

    let debounced_search = use_debounced(search, config.search_debounce);

    let mut loads = use_signal(Vec::<Load>::new);
    let mut pagination = use_signal(|| None::<Pagination>);
    let mut statuses = use_signal(Vec::<Status>::new);
    let mut carriers = use_signal(Vec::<Carrier>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let fetch_token = use_hook(GenerationCounter::default);

    // Reference lists load once. Failures are logged and the table falls
    // back to showing numeric ids.
    use_effect({
        let client = client.clone();
        move || {
            let client = client.clone();
            spawn(async move {
                let (status_result, carrier_result) =
                    futures::join!(client.fetch_statuses(), client.fetch_carriers());
                match status_result {
                    Ok(list) => statuses.set(list),
                    Err(err) => tracing::error!("Failed to load statuses: {}", err),
                }
                match carrier_result {
                    Ok(list) => carriers.set(list),
                    Err(err) => tracing::error!("Failed to load carriers: {}", err),
                }
            });
        }
    });

    // Refetch whenever the page, settled search text, status or carrier
    // changes. Each fetch takes a generation token; a response that comes
    // back after a newer fetch has been issued is dropped, so a slow
    // superseded request cannot clobber newer rows.
    use_effect({
        let client = client.clone();
        move || {
            let query = LoadsQuery {
                page: page(),
                limit: PAGE_SIZE,
                search: debounced_search(),
                status: status(),
                carrier: carrier(),
            };

            let token = fetch_token.next();

            loading.set(true);
            error.set(None);

            let client = client.clone();
            let fetch_token = fetch_token.clone();
            spawn(async move {
                let result = client.fetch_loads(&query).await;
                if !fetch_token.is_current(token) {
                    tracing::debug!("Discarding superseded loads response (token {})", token);
                    return;
                }
                match result {
                    Ok(response) => {
                        loads.set(response.data);
                        pagination.set(Some(response.pagination));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                loading.set(false);
            });
        }
    });

    let on_search_change = move |value: String| {
        navigator().push(Route::LoadBoard {
            filters: filters().with_search(value),
        });
    };
    let on_status_change = move |value: Option<u32>| {
        navigator().push(Route::LoadBoard {
            filters: filters().with_status(value),
        });
    };
    let on_carrier_change = move |value: Option<u32>| {
        navigator().push(Route::LoadBoard {
            filters: filters().with_carrier(value),
        });
    };
    let on_page_change = move |new_page: u32| {
        navigator().push(Route::LoadBoard {
            filters: filters().with_page(new_page),
        });
    };

    let state = view_state(loading(), error.read().as_deref(), loads.read().len());
    let show_empty = state == ViewState::Empty;

    if state == ViewState::Loading {
        return rsx! {
            LoadingSkeleton {}
        };
    }
    if let ViewState::Error(message) = state {
        return rsx! {
            ErrorState { message }
        };
    }

    rsx! {
        div { class: "bg-white rounded-lg shadow overflow-hidden",
            FilterBar {
                search_term: search(),
                selected_status: status(),
                selected_carrier: carrier(),
                statuses: statuses(),
                carriers: carriers(),
                on_search_change,
                on_status_change,
                on_carrier_change,
            }
            if show_empty {
                EmptyState {}
            } else {
                LoadsTable { loads: loads(), statuses: statuses(), carriers: carriers() }
                if let Some(meta) = pagination() {
                    PaginationControls { pagination: meta, on_page_change }
                }
            }
        }
    }
}
