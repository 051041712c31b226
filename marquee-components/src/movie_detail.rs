//! Movie detail panel: title, score, overview

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use marquee_core::model::Movie;
use marquee_core::{Action, Component, EventKind};

use crate::list::bordered;

/// Lines moved per PageUp/PageDown
pub const SCROLL_STEP: i16 = 5;

pub struct MovieDetailProps<'a> {
    pub movie: Option<&'a Movie>,
    pub scroll: u16,
}

#[derive(Default)]
pub struct MovieDetailPanel;

impl MovieDetailPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for MovieDetailPanel {
    type Props<'a> = MovieDetailProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if props.movie.is_none() {
            return None;
        }
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::PageDown => Some(Action::UiScrollDetail(SCROLL_STEP)),
                KeyCode::PageUp => Some(Action::UiScrollDetail(-SCROLL_STEP)),
                _ => None,
            },
            EventKind::Scroll { delta, .. } => {
                Some(Action::UiScrollDetail((*delta).clamp(-1, 1) as i16))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = bordered("Overview", false);

        let Some(movie) = props.movie else {
            let loading = Paragraph::new("Loading movie...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(loading, area);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(movie.title.as_str(), Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(
                    format!("★ {:.1}", movie.vote_average),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::raw(""),
        ];
        if movie.overview.is_empty() {
            lines.push(Line::styled(
                "No overview available.",
                Style::default().fg(Color::DarkGray).italic(),
            ));
        } else {
            lines.push(Line::raw(movie.overview.as_str()));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((props.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
