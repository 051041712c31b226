use async_trait::async_trait;

use marquee_core::model::{Category, Movie};

use crate::error::GatewayError;

/// Read-only access to the movie-data service, one call per logical query
///
/// Inputs are forwarded verbatim. No retry, cache or pagination.
#[async_trait]
pub trait MovieGateway: Send + Sync {
    /// Trending movies of the day
    async fn trending_movies(&self) -> Result<Vec<Movie>, GatewayError>;

    /// All genres
    async fn categories(&self) -> Result<Vec<Category>, GatewayError>;

    async fn movies_by_category(&self, category_id: u64) -> Result<Vec<Movie>, GatewayError>;

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, GatewayError>;

    /// Full movie record, genres included
    async fn movie(&self, id: u64) -> Result<Movie, GatewayError>;

    async fn recommendations(&self, id: u64) -> Result<Vec<Movie>, GatewayError>;
}
