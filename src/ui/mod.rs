pub mod api_context;
pub mod app;
pub mod components;
pub mod format;

pub use app::*;
pub use components::*;
