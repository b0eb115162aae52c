use crate::api::models::{Carrier, LoadsQuery, LoadsResponse, Status};
use reqwest::{Client, Error as ReqwestError};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Failed to fetch loads")]
    LoadsUnavailable,
    #[error("Failed to fetch statuses")]
    StatusesUnavailable,
    #[error("Failed to fetch carriers")]
    CarriersUnavailable,
}

/// HTTP client for the loads API.
#[derive(Clone)]
pub struct LoadsClient {
    client: Client,
    base_url: String,
}

impl LoadsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of loads matching `query`.
    pub async fn fetch_loads(&self, query: &LoadsQuery) -> Result<LoadsResponse, ApiError> {
        let url = format!("{}/loads", self.base_url);

        let mut params = HashMap::new();
        params.insert("page", query.page.to_string());
        params.insert("limit", query.limit.to_string());
        if let Some(status) = query.status {
            params.insert("status", status.to_string());
        }
        if let Some(carrier) = query.carrier {
            params.insert("carrier", carrier.to_string());
        }
        if !query.search.is_empty() {
            params.insert("search", query.search.clone());
        }

        debug!("GET {} with params {:?}", url, params);

        let response = self.client.get(&url).query(&params).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            warn!("Loads request failed: {}", response.status());
            Err(ApiError::LoadsUnavailable)
        }
    }

    /// Fetch the status reference list.
    pub async fn fetch_statuses(&self) -> Result<Vec<Status>, ApiError> {
        let url = format!("{}/statuses", self.base_url);

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            warn!("Statuses request failed: {}", response.status());
            Err(ApiError::StatusesUnavailable)
        }
    }

    /// Fetch the carrier reference list.
    pub async fn fetch_carriers(&self) -> Result<Vec<Carrier>, ApiError> {
        let url = format!("{}/carriers", self.base_url);

        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            warn!("Carriers request failed: {}", response.status());
            Err(ApiError::CarriersUnavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = LoadsClient::new("http://localhost:3001/api/");
        assert_eq!(client.base_url, "http://localhost:3001/api");
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(ApiError::LoadsUnavailable.to_string(), "Failed to fetch loads");
        assert_eq!(
            ApiError::StatusesUnavailable.to_string(),
            "Failed to fetch statuses"
        );
        assert_eq!(
            ApiError::CarriersUnavailable.to_string(),
            "Failed to fetch carriers"
        );
    }
}
