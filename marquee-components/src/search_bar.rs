//! Search form
//!
//! Typing updates the input; Enter navigates to `#search=<input>`.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use marquee_core::{Action, Component, EventKind, Route};

use crate::input::{Edit, LineEditor};
use crate::list::bordered;

pub struct SearchBarProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
}

#[derive(Default)]
pub struct SearchBar {
    editor: LineEditor,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fragment the search form submits to; the query is not altered
pub fn search_fragment(query: &str) -> String {
    Route::Search {
        query: query.to_string(),
    }
    .to_fragment()
}

impl Component for SearchBar {
    type Props<'a> = SearchBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let key = match event {
            EventKind::Key(key) if props.is_focused => key,
            _ => return None,
        };
        match self.editor.handle_key(key, props.value) {
            Edit::Changed(value) => Some((props.on_change)(value)),
            Edit::Submit => Some(Action::NavigateTo(search_fragment(props.value))),
            // Leave the form; focus moves back to the lists
            Edit::Cancel => Some(Action::UiFocusNext),
            Edit::None => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = bordered("Search", props.is_focused);
        let inner = block.inner(area);

        let paragraph = if props.value.is_empty() {
            Paragraph::new("Movie title... (Enter to search)")
                .style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.value)
        };
        frame.render_widget(paragraph.block(block), area);

        if props.is_focused {
            self.editor.show_cursor(frame, inner, props.value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::testing::{key_event, RenderHarness};

    fn props(value: &str, is_focused: bool) -> SearchBarProps<'_> {
        SearchBarProps {
            value,
            is_focused,
            on_change: Action::SearchInputChange,
        }
    }

    #[test]
    fn test_typing_changes_input() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&key_event("l"), props("Deadpoo", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::SearchInputChange("Deadpool".into())]);
    }

    #[test]
    fn test_submit_navigates_to_search() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&key_event("enter"), props("Deadpool", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::NavigateTo("#search=Deadpool".into())]);
    }

    #[test]
    fn test_submit_keeps_whitespace() {
        assert_eq!(search_fragment(" the thing "), "#search= the thing ");
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut bar = SearchBar::new();
        let actions: Vec<_> = bar
            .handle_event(&key_event("a"), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_render_placeholder_and_value() {
        let mut render = RenderHarness::new(50, 3);
        let mut bar = SearchBar::new();

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("", false));
        });
        assert!(output.contains("Movie title..."));

        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), props("Alien", true));
        });
        assert!(output.contains("Alien"));
        assert!(!output.contains("Movie title..."));
    }
}
