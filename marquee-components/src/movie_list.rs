//! Scrollable movie list
//!
//! Used for the trending preview, the generic list (trends, search,
//! category) and related movies. Activating a row navigates to the movie.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use marquee_core::model::{ImageSize, Movie};
use marquee_core::{Action, Component, EventKind, Route};

use crate::list::{bordered, highlight_style, list_key, ListKey, Viewport};

/// Rows each movie takes: title line and poster line
const ITEM_HEIGHT: usize = 2;

pub struct MovieListProps<'a> {
    pub title: &'a str,
    pub movies: &'a [Movie],
    pub selected: usize,
    pub is_focused: bool,
    /// Shown when the list is empty
    pub placeholder: &'a str,
    pub image_base_url: &'a str,
    pub on_select: fn(usize) -> Action,
}

#[derive(Default)]
pub struct MovieList {
    viewport: Viewport,
}

impl MovieList {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fragment a movie row navigates to
pub fn movie_fragment(movie: &Movie) -> String {
    Route::MovieDetail { id: movie.id }.to_fragment()
}

impl Component for MovieList {
    type Props<'a> = MovieListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let Some(key) = list_key(event, props.selected, props.movies.len()) else {
            return None;
        };
        match key {
            ListKey::Select(index) => Some((props.on_select)(index)),
            ListKey::Activate(index) => props
                .movies
                .get(index)
                .map(|movie| Action::NavigateTo(movie_fragment(movie))),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = bordered(props.title, props.is_focused);

        if props.movies.is_empty() {
            let placeholder = Paragraph::new(props.placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize / ITEM_HEIGHT;
        self.viewport.ensure_visible(props.selected, visible);

        let items: Vec<ListItem> = props
            .movies
            .iter()
            .map(|movie| movie_item(movie, props.image_base_url))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style());

        let mut state = ListState::default().with_selected(if props.is_focused {
            Some(props.selected)
        } else {
            None
        });
        *state.offset_mut() = self.viewport.offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn movie_item<'a>(movie: &'a Movie, image_base_url: &str) -> ListItem<'a> {
    let title = Line::from(vec![
        Span::styled(movie.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            format!("★ {:.1}", movie.vote_average),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    let poster = movie
        .poster_url(image_base_url, ImageSize::W300)
        .unwrap_or_else(|| "no poster".to_string());
    let poster = Line::from(Span::styled(
        format!("  {poster}"),
        Style::default().fg(Color::DarkGray),
    ));
    ListItem::new(vec![title, poster])
}
