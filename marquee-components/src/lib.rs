//! Marquee UI components
//!
//! Components implement [`marquee_core::Component`]: they render from props
//! and turn terminal events into actions through callbacks passed in props.
//! None of them touch application state directly.
//!
//! # Components
//!
//! - [`Header`] - title, back arrow, category title, backdrop header
//! - [`SearchBar`] - search form submitting to `#search=<query>`
//! - [`MovieList`] - trending preview, generic list and related movies
//! - [`CategoryList`] - genre preview and movie genres
//! - [`MovieDetailPanel`] - title, score and scrollable overview
//! - [`AddressBar`] - overlay for typing a location fragment
//! - [`HelpBar`] - key hints for the current view
//!
//! # Example
//!
//! ```ignore
//! use marquee_components::{MovieList, MovieListProps};
//!
//! let mut list = MovieList::new();
//! list.render(frame, area, MovieListProps {
//!     title: "Trending",
//!     movies: &state.containers.trending_preview,
//!     selected: state.selected,
//!     is_focused: state.is_focused(Pane::Trending),
//!     placeholder: "Loading...",
//!     image_base_url: &state.image_base_url,
//!     on_select: Action::UiSelect,
//! });
//! ```

mod address_bar;
mod category_list;
mod header;
mod help_bar;
mod input;
mod list;
mod movie_detail;
mod movie_list;
mod search_bar;

pub use address_bar::{centered_rect, AddressBar, AddressBarProps};
pub use category_list::{category_fragment, CategoryList, CategoryListProps};
pub use header::{Header, HeaderProps, APP_TITLE};
pub use help_bar::{hints, HelpBar, HelpBarProps};
pub use input::{Edit, LineEditor};
pub use movie_detail::{MovieDetailPanel, MovieDetailProps, SCROLL_STEP};
pub use movie_list::{movie_fragment, MovieList, MovieListProps};
pub use search_bar::{search_fragment, SearchBar, SearchBarProps};
