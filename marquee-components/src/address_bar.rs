//! Address bar overlay for editing the location fragment directly

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use marquee_core::{Action, Component, EventKind};

use crate::input::{Edit, LineEditor};

pub struct AddressBarProps<'a> {
    pub value: &'a str,
    pub on_change: fn(String) -> Action,
}

#[derive(Default)]
pub struct AddressBar {
    editor: LineEditor,
}

impl AddressBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call when the bar opens so the cursor starts at the end
    pub fn reset(&mut self) {
        self.editor.reset();
    }
}

impl Component for AddressBar {
    type Props<'a> = AddressBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return None;
        };
        match self.editor.handle_key(key, props.value) {
            Edit::Changed(value) => Some((props.on_change)(value)),
            // Typed fragments are taken verbatim
            Edit::Submit => Some(Action::NavigateTo(props.value.to_string())),
            Edit::Cancel => Some(Action::AddressBarClose),
            Edit::None => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let area = centered_rect(area.width.saturating_sub(8).max(20), 3, area);
        frame.render_widget(Clear, area);
        frame.render_widget(BgFill(Color::Rgb(30, 30, 40)), area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Go to (Enter: open, Esc: cancel) ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(props.value).block(block), area);
        self.editor.show_cursor(frame, inner, props.value);
    }
}

/// Simple widget that fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_bg(self.0);
                buf[(x, y)].set_symbol(" ");
            }
        }
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
