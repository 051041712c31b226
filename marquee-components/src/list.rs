//! Shared list plumbing: key navigation, viewport scrolling, styles

use crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use marquee_core::EventKind;

/// What a navigation key asks a list to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKey {
    Select(usize),
    Activate(usize),
}

/// Map j/k/g/G/arrows/Enter to a selection change or activation.
///
/// Returns `None` when the key does nothing at the current position.
pub(crate) fn list_key(event: &EventKind, selected: usize, len: usize) -> Option<ListKey> {
    if len == 0 {
        return None;
    }
    let key = event.key()?;
    let last = len - 1;
    let selected = selected.min(last);

    let target = match key.code {
        KeyCode::Char('j') | KeyCode::Down => (selected + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => selected.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => 0,
        KeyCode::Char('G') | KeyCode::End => last,
        KeyCode::PageDown => (selected + 10).min(last),
        KeyCode::PageUp => selected.saturating_sub(10),
        KeyCode::Enter => return Some(ListKey::Activate(selected)),
        _ => return None,
    };
    (target != selected).then_some(ListKey::Select(target))
}

/// Scroll offset that keeps the selection inside the viewport
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Viewport {
    pub offset: usize,
}

impl Viewport {
    pub fn ensure_visible(&mut self, selected: usize, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if selected < self.offset {
            self.offset = selected;
        } else if selected >= self.offset + visible_rows {
            self.offset = selected.saturating_sub(visible_rows - 1);
        }
    }
}

pub(crate) fn bordered(title: &str, is_focused: bool) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(if is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        })
}

pub(crate) fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}
