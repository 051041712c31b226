//! TMDb client over reqwest

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use marquee_core::model::{Category, Movie};

use crate::error::GatewayError;
use crate::gateway::MovieGateway;
use crate::wire;

pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`TmdbClient`]
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Sent as the `language` query parameter when set
    pub language: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            language: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keep the key out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Service endpoints, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Trending,
    Genres,
    Discover { genre_id: u64 },
    Search { query: String },
    Movie { id: u64 },
    Recommendations { id: u64 },
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Trending => "trending/movie/day".to_string(),
            Endpoint::Genres => "genre/movie/list".to_string(),
            Endpoint::Discover { .. } => "discover/movie".to_string(),
            Endpoint::Search { .. } => "search/movie".to_string(),
            Endpoint::Movie { id } => format!("movie/{id}"),
            Endpoint::Recommendations { id } => format!("movie/{id}/recommendations"),
        }
    }

    /// Endpoint-specific query parameters
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Discover { genre_id } => vec![("with_genres", genre_id.to_string())],
            Endpoint::Search { query } => vec![("query", query.clone())],
            _ => vec![],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Trending => "trending_movies",
            Endpoint::Genres => "categories",
            Endpoint::Discover { .. } => "movies_by_category",
            Endpoint::Search { .. } => "search_movies",
            Endpoint::Movie { .. } => "movie",
            Endpoint::Recommendations { .. } => "recommendations",
        }
    }
}

/// [`MovieGateway`] backed by the TMDb v3 REST API
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: Url,
    api_key: String,
    language: Option<String>,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url.as_str())
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(config: ClientConfig) -> Result<Self, GatewayError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GatewayError::Client)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
            language: config.language,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an endpoint, `api_key` first
    pub fn url(&self, endpoint: &Endpoint) -> Result<Url, GatewayError> {
        let mut url =
            self.base_url
                .join(&endpoint.path())
                .map_err(|e| GatewayError::InvalidBaseUrl {
                    url: self.base_url.to_string(),
                    reason: e.to_string(),
                })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            if let Some(language) = &self.language {
                pairs.append_pair("language", language);
            }
            for (name, value) in endpoint.params() {
                pairs.append_pair(name, &value);
            }
        }
        Ok(url)
    }

    /// Build the GET request without sending it
    pub fn build_request(&self, endpoint: &Endpoint) -> Result<reqwest::Request, GatewayError> {
        let url = self.url(endpoint)?;
        self.http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()
            .map_err(|source| GatewayError::Request {
                endpoint: endpoint.name(),
                source,
            })
    }

    async fn get(&self, endpoint: Endpoint) -> Result<Vec<u8>, GatewayError> {
        let name = endpoint.name();
        let request = self.build_request(&endpoint)?;
        tracing::debug!(endpoint = name, path = %endpoint.path(), "GET");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| GatewayError::Request {
                endpoint: name,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                endpoint: name,
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GatewayError::Request {
                endpoint: name,
                source,
            })?;
        tracing::debug!(endpoint = name, bytes = body.len(), "Response received");
        Ok(body.to_vec())
    }

    async fn get_results(&self, endpoint: Endpoint) -> Result<Vec<Movie>, GatewayError> {
        let name = endpoint.name();
        let body = self.get(endpoint).await?;
        wire::decode_results(name, &body)
    }
}

#[async_trait]
impl MovieGateway for TmdbClient {
    async fn trending_movies(&self) -> Result<Vec<Movie>, GatewayError> {
        self.get_results(Endpoint::Trending).await
    }

    async fn categories(&self) -> Result<Vec<Category>, GatewayError> {
        let endpoint = Endpoint::Genres;
        let name = endpoint.name();
        let body = self.get(endpoint).await?;
        wire::decode_genres(name, &body)
    }

    async fn movies_by_category(&self, category_id: u64) -> Result<Vec<Movie>, GatewayError> {
        self.get_results(Endpoint::Discover {
            genre_id: category_id,
        })
        .await
    }

    async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, GatewayError> {
        self.get_results(Endpoint::Search {
            query: query.to_string(),
        })
        .await
    }

    async fn movie(&self, id: u64) -> Result<Movie, GatewayError> {
        let endpoint = Endpoint::Movie { id };
        let name = endpoint.name();
        let body = self.get(endpoint).await?;
        wire::decode_movie(name, &body)
    }

    async fn recommendations(&self, id: u64) -> Result<Vec<Movie>, GatewayError> {
        self.get_results(Endpoint::Recommendations { id }).await
    }
}

/// Parse the base URL, forcing a trailing `/` so endpoint paths append
/// instead of replacing the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, GatewayError> {
    let invalid = |reason: String| GatewayError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("https://api.themoviedb.org/3").unwrap();
        assert_eq!(url.as_str(), "https://api.themoviedb.org/3/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("not a url"),
            Err(GatewayError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com/"),
            Err(GatewayError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Trending.path(), "trending/movie/day");
        assert_eq!(Endpoint::Genres.path(), "genre/movie/list");
        assert_eq!(Endpoint::Movie { id: 550 }.path(), "movie/550");
        assert_eq!(
            Endpoint::Recommendations { id: 550 }.path(),
            "movie/550/recommendations"
        );
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ClientConfig::new("s3cret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
        assert!(debug.contains("redacted"));
    }
}
