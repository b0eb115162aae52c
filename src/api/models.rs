use serde::Deserialize;

/// One shipment row from the loads endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Load {
    pub id: String,
    pub origin: String,
    pub destination: String,
    /// Status id, resolved against the status reference list.
    pub status: u32,
    /// Pickup date as sent by the server (ISO 8601).
    pub date: String,
    pub weight: f64,
    /// Carrier id, resolved against the carrier reference list.
    pub carrier: u32,
    pub price: f64,
}

/// Status reference entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Status {
    pub id: u32,
    pub label: String,
}

/// Carrier reference entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Carrier {
    pub id: u32,
    pub label: String,
}

/// Paging metadata attached to each loads page.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Envelope returned by the loads endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoadsResponse {
    pub data: Vec<Load>,
    pub pagination: Pagination,
}

/// Query for one page of loads. Empty search text and unset ids are left
/// off the request entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadsQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub status: Option<u32>,
    pub carrier: Option<u32>,
}
