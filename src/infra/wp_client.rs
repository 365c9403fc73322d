//! Client for the WordPress job-filter API.
//!
//! The aggregated filter endpoint returns every known job category and every
//! province with its cities. Each call is a point-in-time snapshot; nothing
//! here is cached or merged across calls, and the endpoint/credential come
//! from the resolved site settings rather than static configuration.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::FILTER_FETCH_TIMEOUT;
use crate::domain::{FilterData, Province};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Upstream filter-data source trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FilterDataProvider: Send + Sync {
    /// Fetch a snapshot of the candidate category/location names
    async fn fetch(&self, filters_url: &str, auth_token: &str) -> AppResult<FilterData>;
}

/// Raw payload of the aggregated filter endpoint.
///
/// `nexjob_lokasi_provinsi` is a JSON object keyed by province name; object
/// order is preserved on deserialization because candidate scan order is part
/// of the resolution contract.
#[derive(Debug, Deserialize)]
struct FiltersResponse {
    #[serde(default)]
    nexjob_kategori_pekerjaan: Vec<String>,
    #[serde(default)]
    nexjob_lokasi_provinsi: serde_json::Map<String, serde_json::Value>,
}

impl From<FiltersResponse> for FilterData {
    fn from(raw: FiltersResponse) -> Self {
        let provinces = raw
            .nexjob_lokasi_provinsi
            .into_iter()
            .map(|(name, cities)| Province {
                name,
                cities: cities
                    .as_array()
                    .map(|list| {
                        list.iter()
                            .filter_map(|c| c.as_str().map(str::to_string))
                            .collect()
                    })
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            categories: raw.nexjob_kategori_pekerjaan,
            provinces,
        }
    }
}

/// Concrete implementation over reqwest.
pub struct WpFiltersClient {
    http: reqwest::Client,
}

impl WpFiltersClient {
    /// Create a client with the filter-fetch deadline baked in.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(FILTER_FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { http }
    }
}

impl Default for WpFiltersClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilterDataProvider for WpFiltersClient {
    async fn fetch(&self, filters_url: &str, auth_token: &str) -> AppResult<FilterData> {
        let mut request = self.http.get(filters_url);
        if !auth_token.is_empty() {
            request = request.bearer_auth(auth_token);
        }

        let response = request.send().await.map_err(request_error)?;
        let response = response.error_for_status().map_err(request_error)?;

        let raw: FiltersResponse = response.json().await.map_err(request_error)?;
        Ok(FilterData::from(raw))
    }
}

/// Convert a reqwest error to AppError, keeping timeouts distinct.
fn request_error(e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::timeout("Filter data fetch")
    } else {
        AppError::upstream(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_converts_preserving_order() {
        let raw: FiltersResponse = serde_json::from_str(
            r#"{
                "nexjob_kategori_pekerjaan": ["Teknologi Informasi", "Pemasaran"],
                "nexjob_lokasi_provinsi": {
                    "Jawa Barat": ["Bandung", "Bekasi"],
                    "DKI Jakarta": ["Jakarta Selatan"]
                }
            }"#,
        )
        .unwrap();

        let data = FilterData::from(raw);
        assert_eq!(data.categories, vec!["Teknologi Informasi", "Pemasaran"]);
        assert_eq!(data.provinces.len(), 2);
        assert_eq!(data.provinces[0].name, "Jawa Barat");
        assert_eq!(data.provinces[0].cities, vec!["Bandung", "Bekasi"]);
        assert_eq!(data.provinces[1].name, "DKI Jakarta");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let raw: FiltersResponse = serde_json::from_str("{}").unwrap();
        let data = FilterData::from(raw);
        assert!(data.categories.is_empty());
        assert!(data.provinces.is_empty());
    }
}
