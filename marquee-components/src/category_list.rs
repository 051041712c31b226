//! Genre list; activating a row opens that category

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use marquee_core::model::Category;
use marquee_core::{Action, Component, EventKind, Route};

use crate::list::{bordered, highlight_style, list_key, ListKey, Viewport};

pub struct CategoryListProps<'a> {
    pub title: &'a str,
    pub categories: &'a [Category],
    pub selected: usize,
    pub is_focused: bool,
    pub placeholder: &'a str,
    pub on_select: fn(usize) -> Action,
}

#[derive(Default)]
pub struct CategoryList {
    viewport: Viewport,
}

impl CategoryList {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Fragment a category row navigates to: `#category=<id>-<name>`
pub fn category_fragment(category: &Category) -> String {
    Route::Category {
        id: category.id,
        name: category.name.clone(),
    }
    .to_fragment()
}

impl Component for CategoryList {
    type Props<'a> = CategoryListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let Some(key) = list_key(event, props.selected, props.categories.len()) else {
            return None;
        };
        match key {
            ListKey::Select(index) => Some((props.on_select)(index)),
            ListKey::Activate(index) => props
                .categories
                .get(index)
                .map(|category| Action::NavigateTo(category_fragment(category))),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = bordered(props.title, props.is_focused);

        if props.categories.is_empty() {
            let placeholder = Paragraph::new(props.placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.viewport.ensure_visible(props.selected, visible);

        let items: Vec<ListItem> = props
            .categories
            .iter()
            .map(|category| ListItem::new(Line::raw(format!("• {}", category.name))))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(highlight_style());

        let mut state =
            ListState::default().with_selected(props.is_focused.then_some(props.selected));
        *state.offset_mut() = self.viewport.offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}
