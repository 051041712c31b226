//! Fragment router
//!
//! The location fragment (the text that would follow `#` in a URL) is the
//! only routing signal. [`Route`] is always reconstructed from it and never
//! stored on its own.

use std::fmt;

const TRENDS_PREFIX: &str = "#trends";
const SEARCH_PREFIX: &str = "#search=";
const MOVIE_PREFIX: &str = "#movie=";
const CATEGORY_PREFIX: &str = "#category=";

/// Header title shown for the trending list
pub const TRENDS_TITLE: &str = "Trends";

/// The active view, derived from the fragment
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Trends,
    Search {
        query: String,
    },
    MovieDetail {
        id: u64,
    },
    Category {
        id: u64,
        name: String,
    },
}

/// Why a recognized fragment could not be turned into a route
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("search fragment has an empty query")]
    EmptyQuery,

    #[error("movie id {value:?} is not a number")]
    InvalidMovieId { value: String },

    #[error("category fragment {value:?} has no name")]
    MissingCategoryName { value: String },

    #[error("category id {value:?} is not a number")]
    InvalidCategoryId { value: String },
}

impl Route {
    /// Parse a fragment. First match wins:
    /// `#trends` (prefix), `#search=`, `#movie=`, `#category=`, else home.
    ///
    /// Parameters are the text after the prefix's `=`. The category payload
    /// splits on its first `-`, so names may contain dashes.
    pub fn parse(fragment: &str) -> Result<Route, RouteError> {
        if fragment.starts_with(TRENDS_PREFIX) {
            return Ok(Route::Trends);
        }

        if let Some(query) = fragment.strip_prefix(SEARCH_PREFIX) {
            if query.is_empty() {
                return Err(RouteError::EmptyQuery);
            }
            return Ok(Route::Search {
                query: query.to_string(),
            });
        }

        if let Some(raw) = fragment.strip_prefix(MOVIE_PREFIX) {
            let id = raw.parse::<u64>().map_err(|_| RouteError::InvalidMovieId {
                value: raw.to_string(),
            })?;
            return Ok(Route::MovieDetail { id });
        }

        if let Some(raw) = fragment.strip_prefix(CATEGORY_PREFIX) {
            let (id, name) = raw
                .split_once('-')
                .filter(|(_, name)| !name.is_empty())
                .ok_or_else(|| RouteError::MissingCategoryName {
                    value: raw.to_string(),
                })?;
            let id = id
                .parse::<u64>()
                .map_err(|_| RouteError::InvalidCategoryId { value: id.to_string() })?;
            return Ok(Route::Category {
                id,
                name: name.to_string(),
            });
        }

        Ok(Route::Home)
    }

    /// Parse a fragment, falling back to home when parameters are malformed
    pub fn from_fragment(fragment: &str) -> Route {
        Route::parse(fragment).unwrap_or_default()
    }

    /// Inverse of [`Route::parse`]; home maps to the empty fragment
    pub fn to_fragment(&self) -> String {
        match self {
            Route::Home => String::new(),
            Route::Trends => TRENDS_PREFIX.to_string(),
            Route::Search { query } => format!("{SEARCH_PREFIX}{query}"),
            Route::MovieDetail { id } => format!("{MOVIE_PREFIX}{id}"),
            Route::Category { id, name } => format!("{CATEGORY_PREFIX}{id}-{name}"),
        }
    }

    /// Title for the category header slot, if this route shows one
    pub fn header_title(&self) -> Option<&str> {
        match self {
            Route::Category { name, .. } => Some(name),
            Route::Trends => Some(TRENDS_TITLE),
            _ => None,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::Trends => write!(f, "trends"),
            Route::Search { query } => write!(f, "search({query})"),
            Route::MovieDetail { id } => write!(f, "movie({id})"),
            Route::Category { id, name } => write!(f, "category({id}, {name})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixes() {
        assert_eq!(Route::parse("#trends"), Ok(Route::Trends));
        assert_eq!(
            Route::parse("#search=Deadpool"),
            Ok(Route::Search {
                query: "Deadpool".into()
            })
        );
        assert_eq!(Route::parse("#movie=550"), Ok(Route::MovieDetail { id: 550 }));
        assert_eq!(
            Route::parse("#category=28-Action"),
            Ok(Route::Category {
                id: 28,
                name: "Action".into()
            })
        );
    }

    #[test]
    fn test_trends_is_a_prefix_match() {
        assert_eq!(Route::parse("#trends=anything"), Ok(Route::Trends));
        assert_eq!(Route::parse("#trendsetter"), Ok(Route::Trends));
    }

    #[test]
    fn test_unrecognized_is_home() {
        assert_eq!(Route::parse(""), Ok(Route::Home));
        assert_eq!(Route::parse("#"), Ok(Route::Home));
        assert_eq!(Route::parse("#home"), Ok(Route::Home));
        assert_eq!(Route::parse("search=x"), Ok(Route::Home));
        assert_eq!(Route::parse("#movies=1"), Ok(Route::Home));
    }

    #[test]
    fn test_search_query_is_verbatim() {
        assert_eq!(
            Route::parse("#search=  star wars = 4 "),
            Ok(Route::Search {
                query: "  star wars = 4 ".into()
            })
        );
    }

    #[test]
    fn test_category_name_keeps_dashes() {
        assert_eq!(
            Route::parse("#category=878-Science-Fiction"),
            Ok(Route::Category {
                id: 878,
                name: "Science-Fiction".into()
            })
        );
    }

    #[test]
    fn test_malformed_parameters() {
        assert_eq!(Route::parse("#search="), Err(RouteError::EmptyQuery));
        assert_eq!(
            Route::parse("#movie=abc"),
            Err(RouteError::InvalidMovieId {
                value: "abc".into()
            })
        );
        assert_eq!(
            Route::parse("#movie="),
            Err(RouteError::InvalidMovieId { value: "".into() })
        );
        assert_eq!(
            Route::parse("#category=28"),
            Err(RouteError::MissingCategoryName { value: "28".into() })
        );
        assert_eq!(
            Route::parse("#category=28-"),
            Err(RouteError::MissingCategoryName {
                value: "28-".into()
            })
        );
        assert_eq!(
            Route::parse("#category=x-Action"),
            Err(RouteError::InvalidCategoryId { value: "x".into() })
        );
    }

    #[test]
    fn test_from_fragment_falls_back_to_home() {
        assert_eq!(Route::from_fragment("#movie=abc"), Route::Home);
        assert_eq!(Route::from_fragment("#movie=12"), Route::MovieDetail { id: 12 });
    }

    #[test]
    fn test_to_fragment_inverse() {
        let routes = [
            Route::Home,
            Route::Trends,
            Route::Search {
                query: "Alien".into(),
            },
            Route::MovieDetail { id: 550 },
            Route::Category {
                id: 878,
                name: "Science-Fiction".into(),
            },
        ];
        for route in routes {
            assert_eq!(Route::from_fragment(&route.to_fragment()), route);
        }
    }

    #[test]
    fn test_header_title() {
        assert_eq!(Route::Trends.header_title(), Some("Trends"));
        assert_eq!(
            Route::Category {
                id: 28,
                name: "Action".into()
            }
            .header_title(),
            Some("Action")
        );
        assert_eq!(Route::Home.header_title(), None);
        assert_eq!(Route::MovieDetail { id: 1 }.header_title(), None);
    }

    #[test]
    fn test_route_error_messages() {
        let err = RouteError::InvalidMovieId {
            value: "abc".into(),
        };
        assert_eq!(err.to_string(), "movie id \"abc\" is not a number");
    }
}
