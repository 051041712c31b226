//! Movie-data gateway
//!
//! [`MovieGateway`] is the narrow contract the application fetches through;
//! [`TmdbClient`] implements it against a TMDb-compatible REST service.
//!
//! ```ignore
//! use marquee_api::{ClientConfig, MovieGateway, TmdbClient};
//!
//! let client = TmdbClient::new(ClientConfig::new(api_key))?;
//! let trending = client.trending_movies().await?;
//! ```

pub mod client;
pub mod error;
pub mod gateway;
pub mod wire;

pub use client::{ClientConfig, Endpoint, TmdbClient, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT};
pub use error::GatewayError;
pub use gateway::MovieGateway;
pub use reqwest::StatusCode;
