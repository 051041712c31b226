//! Screen composition and key routing
//!
//! The layout flags decide which regions are drawn. Keys go to the address
//! bar when it is open, then to the search form when it has focus, then to
//! the global bindings, and finally to the focused pane.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use marquee_components::{
    AddressBar, AddressBarProps, CategoryList, CategoryListProps, Header, HeaderProps, HelpBar,
    HelpBarProps, MovieDetailPanel, MovieDetailProps, MovieList, MovieListProps, SearchBar,
    SearchBarProps,
};
use marquee_core::{Action, AppState, Component, EventKind, LayoutFlags, Pane, Route};

use crate::runtime::EventOutcome;

const SEARCH_HEIGHT: u16 = 3;
const DETAIL_CATEGORIES_HEIGHT: u16 = 8;

#[derive(Default)]
pub struct MarqueeUi {
    header: Header,
    search: SearchBar,
    trending: MovieList,
    categories: CategoryList,
    list: MovieList,
    detail: MovieDetailPanel,
    detail_categories: CategoryList,
    related: MovieList,
    address_bar: AddressBar,
    help: HelpBar,
}

impl MarqueeUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let layout = state.layout;
        let [header_area, body, help_area] = Layout::vertical([
            Constraint::Length(Header::height(layout)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.header.render(
            frame,
            header_area,
            HeaderProps {
                layout,
                category_title: state.category_title.as_deref(),
                backdrop_url: state.backdrop_url.as_deref(),
                movie_title: state
                    .containers
                    .movie_detail
                    .as_ref()
                    .map(|movie| movie.title.as_str()),
                is_loading: state.is_loading(),
                tick: state.tick_count,
            },
        );

        let body = if layout.contains(LayoutFlags::SEARCH_FORM) {
            let [search_area, rest] =
                Layout::vertical([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(0)])
                    .areas(body);
            self.search
                .render(frame, search_area, search_props(state, state.is_focused(Pane::Search)));
            rest
        } else {
            body
        };

        if layout.intersects(LayoutFlags::TRENDING_PREVIEW | LayoutFlags::CATEGORIES_PREVIEW) {
            self.render_previews(frame, body, state);
        }
        if layout.contains(LayoutFlags::GENERIC_LIST) {
            let title = list_title(state);
            self.list.render(
                frame,
                body,
                MovieListProps {
                    title: &title,
                    movies: &state.containers.generic_list,
                    selected: selected(state, Pane::List),
                    is_focused: state.is_focused(Pane::List),
                    placeholder: placeholder(state),
                    image_base_url: &state.image_base_url,
                    on_select: Action::UiSelect,
                },
            );
        }
        if layout.contains(LayoutFlags::MOVIE_DETAIL) {
            self.render_movie(frame, body, state);
        }

        self.help.render(
            frame,
            help_area,
            HelpBarProps {
                layout,
                address_bar_open: state.address_bar.is_some(),
            },
        );

        if let Some(value) = state.address_bar.as_deref() {
            self.address_bar.render(
                frame,
                frame.area(),
                AddressBarProps {
                    value,
                    on_change: Action::AddressBarChange,
                },
            );
        }
    }

    fn render_previews(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        if state.layout.contains(LayoutFlags::TRENDING_PREVIEW) {
            self.trending.render(
                frame,
                left,
                MovieListProps {
                    title: "Trending",
                    movies: &state.containers.trending_preview,
                    selected: selected(state, Pane::Trending),
                    is_focused: state.is_focused(Pane::Trending),
                    placeholder: placeholder(state),
                    image_base_url: &state.image_base_url,
                    on_select: Action::UiSelect,
                },
            );
        }
        if state.layout.contains(LayoutFlags::CATEGORIES_PREVIEW) {
            self.categories.render(
                frame,
                right,
                CategoryListProps {
                    title: "Categories",
                    categories: &state.containers.categories_preview,
                    selected: selected(state, Pane::Categories),
                    is_focused: state.is_focused(Pane::Categories),
                    placeholder: placeholder(state),
                    on_select: Action::UiSelect,
                },
            );
        }
    }

    fn render_movie(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(area);
        let [detail_area, genres_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(DETAIL_CATEGORIES_HEIGHT),
        ])
        .areas(left);

        self.detail.render(
            frame,
            detail_area,
            MovieDetailProps {
                movie: state.containers.movie_detail.as_ref(),
                scroll: state.detail_scroll,
            },
        );
        self.detail_categories.render(
            frame,
            genres_area,
            CategoryListProps {
                title: "Genres",
                categories: &state.containers.detail_categories,
                selected: selected(state, Pane::DetailCategories),
                is_focused: state.is_focused(Pane::DetailCategories),
                placeholder: placeholder(state),
                on_select: Action::UiSelect,
            },
        );
        self.related.render(
            frame,
            right,
            MovieListProps {
                title: "Related movies",
                movies: &state.containers.related_movies,
                selected: selected(state, Pane::Related),
                is_focused: state.is_focused(Pane::Related),
                placeholder: placeholder(state),
                image_base_url: &state.image_base_url,
                on_select: Action::UiSelect,
            },
        );
    }

    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome {
        if let EventKind::Resize(..) = event {
            return EventOutcome::needs_render();
        }
        if event.is_interrupt() {
            return Action::Quit.into();
        }

        if let Some(value) = state.address_bar.as_deref() {
            let props = AddressBarProps {
                value,
                on_change: Action::AddressBarChange,
            };
            return EventOutcome::from_actions(self.address_bar.handle_event(event, props));
        }

        // Typing goes to the search form; only focus keys escape it
        if state.is_focused(Pane::Search) {
            if let Some(action) = focus_key(event) {
                return action.into();
            }
            return EventOutcome::from_actions(
                self.search.handle_event(event, search_props(state, true)),
            );
        }

        if let Some(action) = global_key(event, state.layout) {
            if action == Action::AddressBarOpen {
                self.address_bar.reset();
            }
            return action.into();
        }

        if state.layout.contains(LayoutFlags::MOVIE_DETAIL) {
            let props = MovieDetailProps {
                movie: state.containers.movie_detail.as_ref(),
                scroll: state.detail_scroll,
            };
            let outcome = EventOutcome::from_actions(self.detail.handle_event(event, props));
            if !outcome.actions.is_empty() {
                return outcome;
            }
        }

        self.route_to_focused(event, state)
    }

    fn route_to_focused(&mut self, event: &EventKind, state: &AppState) -> EventOutcome {
        let containers = &state.containers;
        let actions: Vec<Action> = match state.focus {
            Some(Pane::Trending) => self
                .trending
                .handle_event(
                    event,
                    MovieListProps {
                        title: "Trending",
                        movies: &containers.trending_preview,
                        selected: state.selected,
                        is_focused: true,
                        placeholder: "",
                        image_base_url: &state.image_base_url,
                        on_select: Action::UiSelect,
                    },
                )
                .into_iter()
                .collect(),
            Some(Pane::Categories) => self
                .categories
                .handle_event(
                    event,
                    CategoryListProps {
                        title: "Categories",
                        categories: &containers.categories_preview,
                        selected: state.selected,
                        is_focused: true,
                        placeholder: "",
                        on_select: Action::UiSelect,
                    },
                )
                .into_iter()
                .collect(),
            Some(Pane::List) => self
                .list
                .handle_event(
                    event,
                    MovieListProps {
                        title: "",
                        movies: &containers.generic_list,
                        selected: state.selected,
                        is_focused: true,
                        placeholder: "",
                        image_base_url: &state.image_base_url,
                        on_select: Action::UiSelect,
                    },
                )
                .into_iter()
                .collect(),
            Some(Pane::DetailCategories) => self
                .detail_categories
                .handle_event(
                    event,
                    CategoryListProps {
                        title: "Genres",
                        categories: &containers.detail_categories,
                        selected: state.selected,
                        is_focused: true,
                        placeholder: "",
                        on_select: Action::UiSelect,
                    },
                )
                .into_iter()
                .collect(),
            Some(Pane::Related) => self
                .related
                .handle_event(
                    event,
                    MovieListProps {
                        title: "Related movies",
                        movies: &containers.related_movies,
                        selected: state.selected,
                        is_focused: true,
                        placeholder: "",
                        image_base_url: &state.image_base_url,
                        on_select: Action::UiSelect,
                    },
                )
                .into_iter()
                .collect(),
            Some(Pane::Search) | None => Vec::new(),
        };
        EventOutcome::from_actions(actions)
    }
}

fn search_props(state: &AppState, is_focused: bool) -> SearchBarProps<'_> {
    SearchBarProps {
        value: &state.search_input,
        is_focused,
        on_change: Action::SearchInputChange,
    }
}

/// Row highlighted in `pane`; unfocused panes show their top
fn selected(state: &AppState, pane: Pane) -> usize {
    if state.is_focused(pane) {
        state.selected
    } else {
        0
    }
}

fn placeholder(state: &AppState) -> &'static str {
    if state.is_loading() {
        "Loading..."
    } else {
        "Nothing here"
    }
}

fn list_title(state: &AppState) -> String {
    match &state.route {
        Route::Search { query } => format!("Results for \"{query}\""),
        _ => state
            .category_title
            .clone()
            .unwrap_or_else(|| "Movies".to_string()),
    }
}

fn focus_key(event: &EventKind) -> Option<Action> {
    match event.key()?.code {
        KeyCode::Tab => Some(Action::UiFocusNext),
        KeyCode::BackTab => Some(Action::UiFocusPrev),
        _ => None,
    }
}

/// Bindings that work whenever no text input has focus
fn global_key(event: &EventKind, layout: LayoutFlags) -> Option<Action> {
    if let Some(action) = focus_key(event) {
        return Some(action);
    }
    let key = event.key()?;
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let back = layout.contains(LayoutFlags::BACK_ARROW);
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(':') => Some(Action::AddressBarOpen),
        KeyCode::Char('r') => Some(Action::RouteReload),
        KeyCode::Char('/') if layout.contains(LayoutFlags::SEARCH_FORM) => {
            Some(Action::UiFocus(Pane::Search))
        }
        KeyCode::Char('t') if layout.contains(LayoutFlags::TRENDING_PREVIEW) => {
            Some(Action::NavigateTo(Route::Trends.to_fragment()))
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') if back => {
            Some(Action::HistoryBack)
        }
        KeyCode::Char('l') => Some(Action::HistoryForward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::testing::key_event;

    fn home() -> LayoutFlags {
        LayoutFlags::for_route(&Route::Home)
    }

    #[test]
    fn test_trends_shortcut_only_on_home() {
        assert_eq!(
            global_key(&key_event("t"), home()),
            Some(Action::NavigateTo("#trends".into()))
        );
        assert_eq!(
            global_key(&key_event("t"), LayoutFlags::for_route(&Route::Trends)),
            None
        );
    }

    #[test]
    fn test_back_only_with_back_arrow() {
        let movie = LayoutFlags::for_route(&Route::MovieDetail { id: 1 });
        for key in ["esc", "backspace", "h"] {
            assert_eq!(global_key(&key_event(key), movie), Some(Action::HistoryBack));
            assert_eq!(global_key(&key_event(key), home()), None);
        }
    }

    #[test]
    fn test_modified_keys_are_not_global() {
        assert_eq!(global_key(&key_event("ctrl+r"), home()), None);
        assert_eq!(global_key(&key_event("alt+q"), home()), None);
    }

    #[test]
    fn test_focus_keys() {
        assert_eq!(global_key(&key_event("tab"), home()), Some(Action::UiFocusNext));
        assert_eq!(
            global_key(&key_event("shift+tab"), home()),
            Some(Action::UiFocusPrev)
        );
    }

    #[test]
    fn test_slash_focuses_search_form() {
        assert_eq!(
            global_key(&key_event("/"), home()),
            Some(Action::UiFocus(Pane::Search))
        );
        assert_eq!(
            global_key(
                &key_event("/"),
                LayoutFlags::for_route(&Route::MovieDetail { id: 1 })
            ),
            None
        );
    }
}
