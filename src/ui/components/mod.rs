// Load board UI, split the same way the view decomposes:
//
// - **LoadBoard**: page-level state machine and fetch orchestration
// - **FilterBar** / **LoadsTable** / **PaginationControls**: the populated view
// - **LoadingSkeleton** / **ErrorState** / **EmptyState**: the other states
// - **search_hooks**: debounce for the search box

mod empty_state;
mod error_state;
mod filter_bar;
mod load_board;
mod loading_skeleton;
mod loads_table;
mod pagination;
mod search_hooks;
mod status_badge;

pub use load_board::LoadBoard;
