//! Layout visibility flags
//!
//! One flag per shared screen region. The full set is a pure function of
//! the [`Route`], so every route transition overwrites all of them.

use bitflags::bitflags;

use crate::route::Route;
use crate::state::Pane;

bitflags! {
    /// Which shared regions are visible for the active route
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LayoutFlags: u16 {
        /// Tall header used as the movie backdrop
        const HEADER_LONG        = 1 << 0;
        const BACK_ARROW         = 1 << 1;
        /// Back arrow drawn over the backdrop
        const BACK_ARROW_LIGHT   = 1 << 2;
        /// Application title
        const TITLE              = 1 << 3;
        const CATEGORY_TITLE     = 1 << 4;
        const SEARCH_FORM        = 1 << 5;
        const TRENDING_PREVIEW   = 1 << 6;
        const CATEGORIES_PREVIEW = 1 << 7;
        const GENERIC_LIST       = 1 << 8;
        const MOVIE_DETAIL       = 1 << 9;
    }
}

impl LayoutFlags {
    pub fn for_route(route: &Route) -> LayoutFlags {
        match route {
            Route::Home => {
                LayoutFlags::TITLE
                    | LayoutFlags::SEARCH_FORM
                    | LayoutFlags::TRENDING_PREVIEW
                    | LayoutFlags::CATEGORIES_PREVIEW
            }
            Route::Trends | Route::Category { .. } => {
                LayoutFlags::BACK_ARROW | LayoutFlags::CATEGORY_TITLE | LayoutFlags::GENERIC_LIST
            }
            Route::Search { .. } => {
                LayoutFlags::BACK_ARROW | LayoutFlags::SEARCH_FORM | LayoutFlags::GENERIC_LIST
            }
            Route::MovieDetail { .. } => {
                LayoutFlags::HEADER_LONG
                    | LayoutFlags::BACK_ARROW
                    | LayoutFlags::BACK_ARROW_LIGHT
                    | LayoutFlags::MOVIE_DETAIL
            }
        }
    }

    /// Focusable panes in tab order for this layout
    pub fn focus_order(self) -> Vec<Pane> {
        let mut panes = Vec::new();
        if self.contains(LayoutFlags::SEARCH_FORM) {
            panes.push(Pane::Search);
        }
        if self.contains(LayoutFlags::TRENDING_PREVIEW) {
            panes.push(Pane::Trending);
        }
        if self.contains(LayoutFlags::CATEGORIES_PREVIEW) {
            panes.push(Pane::Categories);
        }
        if self.contains(LayoutFlags::GENERIC_LIST) {
            panes.push(Pane::List);
        }
        if self.contains(LayoutFlags::MOVIE_DETAIL) {
            panes.push(Pane::DetailCategories);
            panes.push(Pane::Related);
        }
        panes
    }

    /// Pane focused right after a route change: the main list of the view
    pub fn default_focus(self) -> Option<Pane> {
        if self.contains(LayoutFlags::TRENDING_PREVIEW) {
            Some(Pane::Trending)
        } else if self.contains(LayoutFlags::GENERIC_LIST) {
            Some(Pane::List)
        } else if self.contains(LayoutFlags::MOVIE_DETAIL) {
            Some(Pane::Related)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        vec![
            Route::Home,
            Route::Trends,
            Route::Search { query: "x".into() },
            Route::MovieDetail { id: 1 },
            Route::Category {
                id: 28,
                name: "Action".into(),
            },
        ]
    }

    #[test]
    fn test_home_layout() {
        let flags = LayoutFlags::for_route(&Route::Home);
        assert!(flags.contains(LayoutFlags::TRENDING_PREVIEW | LayoutFlags::CATEGORIES_PREVIEW));
        assert!(flags.contains(LayoutFlags::TITLE | LayoutFlags::SEARCH_FORM));
        assert!(!flags.intersects(
            LayoutFlags::GENERIC_LIST | LayoutFlags::MOVIE_DETAIL | LayoutFlags::BACK_ARROW
        ));
    }

    #[test]
    fn test_movie_layout_uses_long_header() {
        let flags = LayoutFlags::for_route(&Route::MovieDetail { id: 1 });
        assert!(flags.contains(LayoutFlags::HEADER_LONG | LayoutFlags::BACK_ARROW_LIGHT));
        assert!(flags.contains(LayoutFlags::MOVIE_DETAIL));
        assert!(!flags.contains(LayoutFlags::GENERIC_LIST));
        assert!(!flags.contains(LayoutFlags::SEARCH_FORM));
    }

    #[test]
    fn test_search_layout_keeps_form() {
        let flags = LayoutFlags::for_route(&Route::Search { query: "x".into() });
        assert_eq!(
            flags,
            LayoutFlags::BACK_ARROW | LayoutFlags::SEARCH_FORM | LayoutFlags::GENERIC_LIST
        );
    }

    #[test]
    fn test_each_route_has_a_distinct_main_region() {
        for route in all_routes() {
            let flags = LayoutFlags::for_route(&route);
            let main = [
                LayoutFlags::TRENDING_PREVIEW,
                LayoutFlags::GENERIC_LIST,
                LayoutFlags::MOVIE_DETAIL,
            ]
            .iter()
            .filter(|f| flags.contains(**f))
            .count();
            assert_eq!(main, 1, "route {route} shows {main} main regions");
        }
    }

    #[test]
    fn test_back_arrow_everywhere_but_home() {
        for route in all_routes() {
            let flags = LayoutFlags::for_route(&route);
            assert_eq!(flags.contains(LayoutFlags::BACK_ARROW), !route.is_home());
        }
    }

    #[test]
    fn test_focus_order() {
        assert_eq!(
            LayoutFlags::for_route(&Route::Home).focus_order(),
            vec![Pane::Search, Pane::Trending, Pane::Categories]
        );
        assert_eq!(
            LayoutFlags::for_route(&Route::Trends).focus_order(),
            vec![Pane::List]
        );
        assert_eq!(
            LayoutFlags::for_route(&Route::MovieDetail { id: 1 }).focus_order(),
            vec![Pane::DetailCategories, Pane::Related]
        );
    }

    #[test]
    fn test_default_focus_is_never_the_search_form() {
        for route in all_routes() {
            let focus = LayoutFlags::for_route(&route).default_focus();
            assert!(focus.is_some());
            assert_ne!(focus, Some(Pane::Search));
        }
    }
}
