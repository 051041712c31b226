use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use marquee_core::{Component, LayoutFlags};

#[derive(Default)]
pub struct HelpBar;

pub struct HelpBarProps {
    pub layout: LayoutFlags,
    pub address_bar_open: bool,
}

/// Key hints for the current view, as (key, label) pairs
pub fn hints(props: &HelpBarProps) -> Vec<(&'static str, &'static str)> {
    if props.address_bar_open {
        return vec![("Enter", "open"), ("Esc", "cancel")];
    }

    let mut hints = vec![("Tab", "focus"), ("Enter", "open")];
    if props.layout.contains(LayoutFlags::TRENDING_PREVIEW) {
        hints.push(("t", "trends"));
    }
    if props.layout.contains(LayoutFlags::BACK_ARROW) {
        hints.push(("Esc", "back"));
    }
    if props.layout.contains(LayoutFlags::MOVIE_DETAIL) {
        hints.push(("PgUp/PgDn", "scroll"));
    }
    hints.extend([(":", "go to"), ("r", "reload"), ("q", "quit")]);
    hints
}

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for (index, (key, label)) in hints(&props).into_iter().enumerate() {
            let key = if index == 0 {
                format!(" {key}")
            } else {
                key.to_string()
            };
            spans.push(Span::styled(key, Style::default().fg(Color::Cyan).bold()));
            spans.push(Span::styled(
                format!(" {label}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
