//! Reducer: (state, action) -> effects
//!
//! All state mutations happen here. Route changes reconfigure the whole
//! layout, bump the generation and return the fetches for the new view.
//! Results are applied only while their generation is current.

use crate::action::Action;
use crate::effect::{DispatchResult, Effect, FetchRequest};
use crate::layout::LayoutFlags;
use crate::model::{ImageSize, Movie};
use crate::route::Route;
use crate::state::{AppState, CategoryContainer, Generation, MovieContainer};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult {
    match action {
        // ===== Navigation =====
        Action::NavigateTo(fragment) => {
            // Same-fragment navigation does not fire a change
            if fragment == state.fragment {
                return close_address_bar(state);
            }
            state.history.push(fragment.clone());
            apply_route(state, fragment)
        }

        Action::HistoryBack => match state.history.back().map(str::to_string) {
            Some(fragment) => apply_route(state, fragment),
            None => DispatchResult::unchanged(),
        },

        Action::HistoryForward => match state.history.forward().map(str::to_string) {
            Some(fragment) => apply_route(state, fragment),
            None => DispatchResult::unchanged(),
        },

        Action::RouteFragmentChanged(fragment) => {
            if fragment != state.history.current() {
                state.history.push(fragment.clone());
            }
            apply_route(state, fragment)
        }

        Action::RouteReload => {
            let fragment = state.fragment.clone();
            apply_route(state, fragment)
        }

        // ===== Gateway results =====
        Action::MoviesDidLoad {
            generation,
            target,
            movies,
        } => {
            if is_stale(state, generation, "MoviesDidLoad") {
                return DispatchResult::unchanged();
            }
            state.containers.fill_movies(target, movies);
            settle(state);
            DispatchResult::changed()
        }

        Action::CategoriesDidLoad {
            generation,
            target,
            categories,
        } => {
            if is_stale(state, generation, "CategoriesDidLoad") {
                return DispatchResult::unchanged();
            }
            state.containers.fill_categories(target, categories);
            settle(state);
            DispatchResult::changed()
        }

        Action::MovieDidLoad { generation, movie } => {
            if is_stale(state, generation, "MovieDidLoad") {
                return DispatchResult::unchanged();
            }
            show_movie(state, movie);
            settle(state);

            // Related movies follow the id in the fragment, not the response
            let Route::MovieDetail { id } = state.route else {
                return DispatchResult::changed();
            };
            state.pending += 1;
            DispatchResult::changed_with(Effect::fetch(
                generation,
                FetchRequest::Recommendations { id },
            ))
        }

        Action::FetchDidFail {
            generation,
            request,
            error,
        } => {
            if is_stale(state, generation, "FetchDidFail") {
                return DispatchResult::unchanged();
            }
            // No error UI: the target container keeps its previous content
            tracing::warn!(request = request.name(), %error, "Fetch failed");
            settle(state);
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::UiFocusNext => cycle_focus(state, 1),
        Action::UiFocusPrev => cycle_focus(state, -1),

        Action::UiFocus(pane) => {
            if state.focus == Some(pane) || !state.layout.focus_order().contains(&pane) {
                return DispatchResult::unchanged();
            }
            state.focus = Some(pane);
            state.selected = 0;
            DispatchResult::changed()
        }

        Action::UiSelect(index) => {
            let len = state.focused_len();
            if len == 0 {
                return DispatchResult::unchanged();
            }
            let index = index.min(len - 1);
            if index == state.selected {
                return DispatchResult::unchanged();
            }
            state.selected = index;
            DispatchResult::changed()
        }

        Action::UiScrollDetail(delta) => {
            let scroll = if delta < 0 {
                state.detail_scroll.saturating_sub(delta.unsigned_abs())
            } else {
                state.detail_scroll.saturating_add(delta as u16)
            };
            if scroll == state.detail_scroll {
                return DispatchResult::unchanged();
            }
            state.detail_scroll = scroll;
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::AddressBarOpen => {
            state.address_bar = Some(state.fragment.clone());
            DispatchResult::changed()
        }

        Action::AddressBarChange(text) => match state.address_bar.as_mut() {
            Some(bar) => {
                *bar = text;
                DispatchResult::changed()
            }
            None => DispatchResult::unchanged(),
        },

        Action::AddressBarClose => close_address_bar(state),

        // ===== Global =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            DispatchResult {
                // spinner only
                changed: state.is_loading(),
                effects: vec![],
            }
        }

        // Handled by the runtime loop
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Configure the view for `fragment` and return its fetches
fn apply_route(state: &mut AppState, fragment: String) -> DispatchResult {
    let route = match Route::parse(&fragment) {
        Ok(route) => route,
        Err(error) => {
            tracing::warn!(%fragment, %error, "Malformed fragment, showing home");
            Route::Home
        }
    };

    state.layout = LayoutFlags::for_route(&route);
    state.category_title = route.header_title().map(str::to_string);
    state.backdrop_url = None;
    if let Route::Search { query } = &route {
        state.search_input = query.clone();
    }

    state.generation = state.generation.next();
    let effects: Vec<Effect> = fetches_for(&route)
        .into_iter()
        .map(|request| Effect::fetch(state.generation, request))
        .collect();
    state.pending = effects.len();

    // Back to the top of the new view
    state.focus = state.layout.default_focus();
    state.selected = 0;
    state.detail_scroll = 0;
    state.address_bar = None;

    tracing::info!(
        %route,
        generation = state.generation.0,
        fetches = effects.len(),
        "Route changed"
    );

    state.fragment = fragment;
    state.route = route;
    DispatchResult::changed_with_many(effects)
}

/// The fetch sequence issued when a route becomes active
pub fn fetches_for(route: &Route) -> Vec<FetchRequest> {
    match route {
        Route::Home => vec![
            FetchRequest::TrendingMovies {
                target: MovieContainer::TrendingPreview,
            },
            FetchRequest::Categories {
                target: CategoryContainer::CategoriesPreview,
            },
        ],
        Route::Trends => vec![FetchRequest::TrendingMovies {
            target: MovieContainer::GenericList,
        }],
        Route::Search { query } => vec![FetchRequest::SearchMovies {
            query: query.clone(),
        }],
        Route::Category { id, .. } => vec![FetchRequest::MoviesByCategory { category_id: *id }],
        // Recommendations follow once the movie itself has loaded
        Route::MovieDetail { id } => vec![FetchRequest::MovieDetail { id: *id }],
    }
}

fn show_movie(state: &mut AppState, movie: Movie) {
    state.backdrop_url = movie.poster_url(&state.image_base_url, ImageSize::W500);
    state
        .containers
        .fill_categories(CategoryContainer::DetailCategories, movie.genres.clone());
    state.containers.movie_detail = Some(movie);
}

fn is_stale(state: &AppState, generation: Generation, action: &'static str) -> bool {
    if generation == state.generation {
        return false;
    }
    tracing::debug!(
        action,
        result_generation = generation.0,
        current_generation = state.generation.0,
        "Dropping stale result"
    );
    true
}

/// One current-generation fetch has reported back
fn settle(state: &mut AppState) {
    state.pending = state.pending.saturating_sub(1);
    let len = state.focused_len();
    if len > 0 && state.selected >= len {
        state.selected = len - 1;
    }
}

fn cycle_focus(state: &mut AppState, step: isize) -> DispatchResult {
    let order = state.layout.focus_order();
    if order.is_empty() {
        return DispatchResult::unchanged();
    }
    let len = order.len() as isize;
    let next = match state
        .focus
        .and_then(|pane| order.iter().position(|p| *p == pane))
    {
        Some(current) => (current as isize + step).rem_euclid(len) as usize,
        None if step < 0 => order.len() - 1,
        None => 0,
    };
    state.focus = Some(order[next]);
    state.selected = 0;
    DispatchResult::changed()
}

fn close_address_bar(state: &mut AppState) -> DispatchResult {
    if state.address_bar.take().is_some() {
        DispatchResult::changed()
    } else {
        DispatchResult::unchanged()
    }
}
