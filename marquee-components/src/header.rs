use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use marquee_core::{Component, LayoutFlags};

pub const APP_TITLE: &str = "MARQUEE";
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Default)]
pub struct Header;

pub struct HeaderProps<'a> {
    pub layout: LayoutFlags,
    pub category_title: Option<&'a str>,
    /// Poster shown behind the long header
    pub backdrop_url: Option<&'a str>,
    pub movie_title: Option<&'a str>,
    pub is_loading: bool,
    pub tick: u64,
}

impl Header {
    pub const HEIGHT: u16 = 2;
    pub const LONG_HEIGHT: u16 = 5;

    pub fn height(layout: LayoutFlags) -> u16 {
        if layout.contains(LayoutFlags::HEADER_LONG) {
            Self::LONG_HEIGHT
        } else {
            Self::HEIGHT
        }
    }
}

impl Component for Header {
    type Props<'a> = HeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let layout = props.layout;
        let mut spans = Vec::new();

        if layout.contains(LayoutFlags::BACK_ARROW) {
            let arrow = if layout.contains(LayoutFlags::BACK_ARROW_LIGHT) {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(Color::Cyan).bold()
            };
            spans.push(Span::styled(" < ", arrow));
        }
        if layout.contains(LayoutFlags::TITLE) {
            spans.push(Span::styled(
                format!(" {APP_TITLE} "),
                Style::default().fg(Color::Magenta).bold(),
            ));
        }
        if layout.contains(LayoutFlags::CATEGORY_TITLE) {
            if let Some(title) = props.category_title {
                spans.push(Span::styled(
                    title.to_string(),
                    Style::default().fg(Color::White).bold(),
                ));
            }
        }
        if props.is_loading {
            let frame_char = SPINNER[(props.tick % SPINNER.len() as u64) as usize];
            spans.push(Span::styled(
                format!("  {frame_char}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if !layout.contains(LayoutFlags::HEADER_LONG) {
            let chunks =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
            frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
            return;
        }

        // Long header: a framed backdrop with the movie title
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .bg(Color::Rgb(25, 25, 35));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(title) = props.movie_title {
            spans.push(Span::styled(
                title.to_string(),
                Style::default().fg(Color::White).bold(),
            ));
        }
        let backdrop = Line::from(Span::styled(
            props.backdrop_url.unwrap_or("").to_string(),
            Style::default().fg(Color::DarkGray).italic(),
        ));
        frame.render_widget(Paragraph::new(vec![Line::from(spans), Line::raw(""), backdrop]), inner);
    }
}
