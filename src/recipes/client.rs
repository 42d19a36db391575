//! TheMealDB REST API Client
//!
//! HTTP client for the public recipe search endpoint.

use super::types::{MealRecord, SearchResponse};
use super::{ApiError, RecipeSource};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Configuration for the recipe API client
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    /// Base URL, without trailing slash (e.g. "https://www.themealdb.com/api/json/v1/1")
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.themealdb.com/api/json/v1/1".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// TheMealDB API client
pub struct MealDbClient {
    client: Client,
    config: MealDbConfig,
}

impl MealDbClient {
    /// Create a new client with the given configuration
    pub fn new(config: MealDbConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("mealplan/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MealDbConfig {
        &self.config
    }

    /// Full search URL with the query percent-encoded
    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search.php?s={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn search(&self, query: &str) -> Result<Vec<MealRecord>, ApiError> {
        let url = self.search_url(query);
        tracing::debug!(url = %url, "making recipe search request");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(body.meals.unwrap_or_default())
    }
}
