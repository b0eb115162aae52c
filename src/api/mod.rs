// HTTP access to the loads backend: the wire models and the client that
// fetches loads pages and the status/carrier reference lists.

mod client;
mod models;

pub use client::{ApiError, LoadsClient};
pub use models::{Carrier, Load, LoadsQuery, LoadsResponse, Pagination, Status};
