//! Recipe Search
//!
//! Everything that talks to, or is shaped by, the remote recipe API:
//! - wire types and ingredient extraction ([`types`])
//! - the TheMealDB HTTP client ([`client`])

mod client;
mod types;

pub use client::{MealDbClient, MealDbConfig};
pub use types::{
    MealRecord, Recipe, SearchResponse, INGREDIENT_SEPARATOR, MAX_INGREDIENTS, NO_INSTRUCTIONS,
    UNTITLED,
};

use async_trait::async_trait;

/// Anything that can answer a recipe search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search recipes by name. An empty vector means nothing matched.
    async fn search(&self, query: &str) -> Result<Vec<MealRecord>, ApiError>;
}

/// Errors that can occur when searching for recipes
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {0}")]
    Status(u16),

    #[error("Unable to decode response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "API request failed with status 500"
        );
        assert_eq!(
            ApiError::Decode("eof".into()).to_string(),
            "Unable to decode response: eof"
        );
    }
}
