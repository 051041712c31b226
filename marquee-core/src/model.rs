//! Movie and category records as returned by the movie-data service
//!
//! Records are transient: they are decoded from a response, placed into a
//! container, and dropped when the container is refilled.

use serde::Deserialize;

/// A genre tag, used both as display metadata and as a filter key
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// A movie record
///
/// List endpoints omit `genres`, so it defaults to empty. Detail fetches
/// fill it in.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub genres: Vec<Category>,
}

/// Default image host prefix
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Image size tokens understood by the image host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    /// List thumbnails
    W300,
    /// Detail backdrop
    W500,
}

impl ImageSize {
    pub fn token(self) -> &'static str {
        match self {
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
        }
    }
}

/// Build an image URL: host prefix + size token + poster path.
///
/// The poster path from the service already starts with `/`.
pub fn poster_url(image_base_url: &str, size: ImageSize, poster_path: &str) -> String {
    let base = image_base_url.trim_end_matches('/');
    format!("{}/{}{}", base, size.token(), poster_path)
}

impl Movie {
    /// Poster URL at the given size, if the movie has a poster
    pub fn poster_url(&self, image_base_url: &str, size: ImageSize) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| poster_url(image_base_url, size, path))
    }
}
