//! Response envelopes and decoding

use serde::de::DeserializeOwned;
use serde::Deserialize;

use marquee_core::model::{Category, Movie};

use crate::error::GatewayError;

/// `{ "results": [...] }` list responses
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsEnvelope {
    #[serde(default)]
    pub results: Vec<Movie>,
}

/// `{ "genres": [...] }` from the genre list
#[derive(Debug, Deserialize)]
pub(crate) struct GenresEnvelope {
    #[serde(default)]
    pub genres: Vec<Category>,
}

pub(crate) fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &[u8],
) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|source| GatewayError::Decode { endpoint, source })
}

pub fn decode_results(endpoint: &'static str, body: &[u8]) -> Result<Vec<Movie>, GatewayError> {
    decode::<ResultsEnvelope>(endpoint, body).map(|envelope| envelope.results)
}

pub fn decode_genres(endpoint: &'static str, body: &[u8]) -> Result<Vec<Category>, GatewayError> {
    decode::<GenresEnvelope>(endpoint, body).map(|envelope| envelope.genres)
}

pub fn decode_movie(endpoint: &'static str, body: &[u8]) -> Result<Movie, GatewayError> {
    decode(endpoint, body)
}
