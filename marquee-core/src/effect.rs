//! Side effects returned by the reducer
//!
//! The reducer never performs I/O. It returns [`Effect`] values that the
//! runtime hands to its effect handler, which spawns the actual gateway
//! call and sends a result action back.
//!
//! ```ignore
//! let result = store.dispatch(Action::RouteFragmentChanged("#movie=550".into()));
//! for effect in result.effects {
//!     match effect {
//!         Effect::Fetch { generation, request } => {
//!             // spawn gateway call, send *DidLoad / FetchDidFail back
//!         }
//!     }
//! }
//! ```

use crate::state::{CategoryContainer, Generation, MovieContainer};

/// Result of dispatching an action.
///
/// Contains both the state change indicator and any effects to be processed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchResult {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<Effect>,
}

impl DispatchResult {
    #[inline]
    pub fn unchanged() -> Self {
        Self::default()
    }

    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    #[inline]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[inline]
    pub fn changed_with_many(effects: Vec<Effect>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }
}

/// Work requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read from the movie-data service on behalf of `generation`
    Fetch {
        generation: Generation,
        request: FetchRequest,
    },
}

/// One logical read against the movie-data service, with its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    TrendingMovies { target: MovieContainer },
    Categories { target: CategoryContainer },
    MoviesByCategory { category_id: u64 },
    SearchMovies { query: String },
    MovieDetail { id: u64 },
    Recommendations { id: u64 },
}

impl FetchRequest {
    /// Task key: one in-flight request per destination container.
    ///
    /// A new request into the same container supersedes the old one.
    pub fn task_key(&self) -> &'static str {
        match self {
            FetchRequest::TrendingMovies {
                target: MovieContainer::TrendingPreview,
            } => "trending_preview",
            FetchRequest::Categories {
                target: CategoryContainer::CategoriesPreview,
            } => "categories_preview",
            FetchRequest::Categories {
                target: CategoryContainer::DetailCategories,
            } => "detail_categories",
            FetchRequest::TrendingMovies {
                target: MovieContainer::RelatedMovies,
            }
            | FetchRequest::Recommendations { .. } => "related_movies",
            FetchRequest::TrendingMovies {
                target: MovieContainer::GenericList,
            }
            | FetchRequest::MoviesByCategory { .. }
            | FetchRequest::SearchMovies { .. } => "generic_list",
            FetchRequest::MovieDetail { .. } => "movie_detail",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FetchRequest::TrendingMovies { .. } => "trending_movies",
            FetchRequest::Categories { .. } => "categories",
            FetchRequest::MoviesByCategory { .. } => "movies_by_category",
            FetchRequest::SearchMovies { .. } => "search_movies",
            FetchRequest::MovieDetail { .. } => "movie",
            FetchRequest::Recommendations { .. } => "recommendations",
        }
    }
}

impl Effect {
    pub fn fetch(generation: Generation, request: FetchRequest) -> Self {
        Effect::Fetch {
            generation,
            request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_result_builders() {
        let r = DispatchResult::unchanged();
        assert!(!r.changed);
        assert!(r.effects.is_empty());

        let r = DispatchResult::changed();
        assert!(r.changed);
        assert!(r.effects.is_empty());

        let effect = Effect::fetch(Generation(1), FetchRequest::MovieDetail { id: 1 });
        let r = DispatchResult::changed_with(effect.clone());
        assert!(r.changed);
        assert_eq!(r.effects, vec![effect]);
    }

    #[test]
    fn test_generic_list_requests_share_a_task_key() {
        let keys = [
            FetchRequest::TrendingMovies {
                target: MovieContainer::GenericList,
            }
            .task_key(),
            FetchRequest::MoviesByCategory { category_id: 28 }.task_key(),
            FetchRequest::SearchMovies { query: "x".into() }.task_key(),
        ];
        assert!(keys.iter().all(|k| *k == "generic_list"));
    }

    #[test]
    fn test_preview_and_detail_keys_differ() {
        assert_ne!(
            FetchRequest::TrendingMovies {
                target: MovieContainer::TrendingPreview
            }
            .task_key(),
            FetchRequest::Categories {
                target: CategoryContainer::CategoriesPreview
            }
            .task_key()
        );
        assert_ne!(
            FetchRequest::MovieDetail { id: 1 }.task_key(),
            FetchRequest::Recommendations { id: 1 }.task_key()
        );
    }
}
