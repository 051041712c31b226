//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::event::EventKind;

/// A pure UI component that renders from props and emits actions
///
/// Props carry everything needed to render, including whether the
/// component has focus. `handle_event` returns actions and never touches
/// application state. Internal UI state (cursor position, list offset) may
/// live in `&mut self`.
pub trait Component {
    /// Data required to render the component (read-only)
    type Props<'a>;

    /// Handle an event and return actions to dispatch
    ///
    /// Returns `None`, `Some(action)` or a collection. The default returns
    /// nothing, for render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        None::<Action>
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
