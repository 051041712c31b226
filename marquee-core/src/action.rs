//! Actions dispatched to the store
//!
//! Intent actions come from key presses and navigation. Result actions
//! (`*DidLoad`, `FetchDidFail`) carry gateway responses back, tagged with
//! the generation they were requested under.

use crate::effect::FetchRequest;
use crate::model::{Category, Movie};
use crate::state::{CategoryContainer, Generation, MovieContainer, Pane};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Navigation
    /// Go to a new fragment, pushing it onto history
    NavigateTo(String),
    HistoryBack,
    HistoryForward,
    /// The current fragment changed (start-up, navigation, history traversal)
    RouteFragmentChanged(String),
    /// Re-run the current route without touching history
    RouteReload,

    // Gateway results
    MoviesDidLoad {
        generation: Generation,
        target: MovieContainer,
        movies: Vec<Movie>,
    },
    CategoriesDidLoad {
        generation: Generation,
        target: CategoryContainer,
        categories: Vec<Category>,
    },
    MovieDidLoad {
        generation: Generation,
        movie: Movie,
    },
    FetchDidFail {
        generation: Generation,
        request: FetchRequest,
        error: String,
    },

    // UI
    UiFocusNext,
    UiFocusPrev,
    UiFocus(Pane),
    UiSelect(usize),
    UiScrollDetail(i16),

    SearchInputChange(String),

    AddressBarOpen,
    AddressBarChange(String),
    AddressBarClose,

    Tick,
    Quit,
}

impl Action {
    /// Variant name for logging and filtering
    pub fn name(&self) -> &'static str {
        match self {
            Action::NavigateTo(_) => "NavigateTo",
            Action::HistoryBack => "HistoryBack",
            Action::HistoryForward => "HistoryForward",
            Action::RouteFragmentChanged(_) => "RouteFragmentChanged",
            Action::RouteReload => "RouteReload",
            Action::MoviesDidLoad { .. } => "MoviesDidLoad",
            Action::CategoriesDidLoad { .. } => "CategoriesDidLoad",
            Action::MovieDidLoad { .. } => "MovieDidLoad",
            Action::FetchDidFail { .. } => "FetchDidFail",
            Action::UiFocusNext => "UiFocusNext",
            Action::UiFocusPrev => "UiFocusPrev",
            Action::UiFocus(_) => "UiFocus",
            Action::UiSelect(_) => "UiSelect",
            Action::UiScrollDetail(_) => "UiScrollDetail",
            Action::SearchInputChange(_) => "SearchInputChange",
            Action::AddressBarOpen => "AddressBarOpen",
            Action::AddressBarChange(_) => "AddressBarChange",
            Action::AddressBarClose => "AddressBarClose",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Group used to filter actions in tests and logs
    pub fn category(&self) -> Option<&'static str> {
        match self {
            Action::NavigateTo(_)
            | Action::HistoryBack
            | Action::HistoryForward
            | Action::RouteFragmentChanged(_)
            | Action::RouteReload => Some("route"),
            Action::MoviesDidLoad { .. }
            | Action::CategoriesDidLoad { .. }
            | Action::MovieDidLoad { .. }
            | Action::FetchDidFail { .. } => Some("fetch"),
            Action::UiFocusNext
            | Action::UiFocusPrev
            | Action::UiFocus(_)
            | Action::UiSelect(_)
            | Action::UiScrollDetail(_) => Some("ui"),
            Action::SearchInputChange(_) => Some("search"),
            Action::AddressBarOpen | Action::AddressBarChange(_) | Action::AddressBarClose => {
                Some("address_bar")
            }
            Action::Tick | Action::Quit => None,
        }
    }

    /// One-line description that leaves out bulky payloads
    pub fn summary(&self) -> String {
        match self {
            Action::NavigateTo(fragment) => format!("NavigateTo({fragment:?})"),
            Action::RouteFragmentChanged(fragment) => {
                format!("RouteFragmentChanged({fragment:?})")
            }
            Action::MoviesDidLoad {
                generation,
                target,
                movies,
            } => format!(
                "MoviesDidLoad {{ generation: {}, target: {:?}, movies: {} }}",
                generation.0,
                target,
                movies.len()
            ),
            Action::CategoriesDidLoad {
                generation,
                target,
                categories,
            } => format!(
                "CategoriesDidLoad {{ generation: {}, target: {:?}, categories: {} }}",
                generation.0,
                target,
                categories.len()
            ),
            Action::MovieDidLoad { generation, movie } => format!(
                "MovieDidLoad {{ generation: {}, id: {} }}",
                generation.0, movie.id
            ),
            Action::FetchDidFail {
                generation,
                request,
                ..
            } => format!(
                "FetchDidFail {{ generation: {}, request: {} }}",
                generation.0,
                request.name()
            ),
            // Typed text stays out of the log
            Action::SearchInputChange(_) => "SearchInputChange".to_string(),
            Action::AddressBarChange(_) => "AddressBarChange".to_string(),
            other => format!("{other:?}"),
        }
    }

    /// Whether this is a gateway result
    pub fn is_result(&self) -> bool {
        self.category() == Some("fetch")
    }
}
