//! Application state owned by the store

use crate::history::History;
use crate::layout::LayoutFlags;
use crate::model::{Category, Movie, DEFAULT_IMAGE_BASE_URL};
use crate::route::Route;

/// Request token identifying the route transition a fetch belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Generation {
        Generation(self.0.wrapping_add(1))
    }
}

/// Movie display slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovieContainer {
    TrendingPreview,
    GenericList,
    RelatedMovies,
}

/// Category display slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryContainer {
    CategoriesPreview,
    DetailCategories,
}

/// Shared display slots. Every fill replaces the slot's whole content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Containers {
    pub trending_preview: Vec<Movie>,
    pub categories_preview: Vec<Category>,
    pub generic_list: Vec<Movie>,
    pub movie_detail: Option<Movie>,
    pub detail_categories: Vec<Category>,
    pub related_movies: Vec<Movie>,
}

impl Containers {
    pub fn fill_movies(&mut self, target: MovieContainer, movies: Vec<Movie>) {
        *self.movies_mut(target) = movies;
    }

    pub fn fill_categories(&mut self, target: CategoryContainer, categories: Vec<Category>) {
        match target {
            CategoryContainer::CategoriesPreview => self.categories_preview = categories,
            CategoryContainer::DetailCategories => self.detail_categories = categories,
        }
    }

    pub fn movies(&self, target: MovieContainer) -> &[Movie] {
        match target {
            MovieContainer::TrendingPreview => &self.trending_preview,
            MovieContainer::GenericList => &self.generic_list,
            MovieContainer::RelatedMovies => &self.related_movies,
        }
    }

    pub fn categories(&self, target: CategoryContainer) -> &[Category] {
        match target {
            CategoryContainer::CategoriesPreview => &self.categories_preview,
            CategoryContainer::DetailCategories => &self.detail_categories,
        }
    }

    fn movies_mut(&mut self, target: MovieContainer) -> &mut Vec<Movie> {
        match target {
            MovieContainer::TrendingPreview => &mut self.trending_preview,
            MovieContainer::GenericList => &mut self.generic_list,
            MovieContainer::RelatedMovies => &mut self.related_movies,
        }
    }
}

/// Focusable regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pane {
    Search,
    Trending,
    Categories,
    List,
    DetailCategories,
    Related,
}

#[derive(Clone, Debug)]
pub struct AppState {
    /// Current location fragment
    pub fragment: String,
    pub route: Route,
    pub layout: LayoutFlags,
    /// Category header title (category name or "Trends")
    pub category_title: Option<String>,
    /// Backdrop image for the long header on the movie view
    pub backdrop_url: Option<String>,
    pub containers: Containers,
    pub history: History,
    pub generation: Generation,
    /// Fetches issued for the current generation that have not reported back
    pub pending: usize,
    pub focus: Option<Pane>,
    /// Selected row in the focused list
    pub selected: usize,
    pub detail_scroll: u16,
    pub search_input: String,
    /// Open address bar and its text
    pub address_bar: Option<String>,
    pub image_base_url: String,
    pub tick_count: u64,
}

impl AppState {
    /// State before the first route has been applied.
    ///
    /// The runtime dispatches `RouteFragmentChanged(initial)` on start-up.
    pub fn new(initial_fragment: impl Into<String>, image_base_url: impl Into<String>) -> Self {
        let fragment = initial_fragment.into();
        Self {
            history: History::new(fragment.clone()),
            fragment,
            route: Route::Home,
            layout: LayoutFlags::empty(),
            category_title: None,
            backdrop_url: None,
            containers: Containers::default(),
            generation: Generation::default(),
            pending: 0,
            focus: None,
            selected: 0,
            detail_scroll: 0,
            search_input: String::new(),
            address_bar: None,
            image_base_url: image_base_url.into(),
            tick_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Number of rows in the focused pane
    pub fn focused_len(&self) -> usize {
        match self.focus {
            Some(Pane::Trending) => self.containers.trending_preview.len(),
            Some(Pane::Categories) => self.containers.categories_preview.len(),
            Some(Pane::List) => self.containers.generic_list.len(),
            Some(Pane::DetailCategories) => self.containers.detail_categories.len(),
            Some(Pane::Related) => self.containers.related_movies.len(),
            Some(Pane::Search) | None => 0,
        }
    }

    pub fn is_focused(&self, pane: Pane) -> bool {
        self.focus == Some(pane)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("", DEFAULT_IMAGE_BASE_URL)
    }
}
