//! Test utilities
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g., `key("ctrl+c")`)
//! - [`TestHarness`]: state plus an action channel, driven by the reducer
//! - [`RenderHarness`]: render into a `TestBackend` and read the screen back
//! - Assertion macros for verifying emitted actions
//!
//! ```ignore
//! use marquee_core::testing::{key_event, TestHarness};
//!
//! let mut harness = TestHarness::default();
//! harness.dispatch(Action::RouteFragmentChanged("#trends".into()));
//! harness.emit(Action::UiSelect(1));
//! assert_emitted!(harness.drain_emitted(), Action::UiSelect(1));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::event::{parse_key_string, EventKind};
use crate::reducer::reducer;
use crate::state::AppState;

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with Ctrl modifier.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Wrap a key string into an [`EventKind`] for `handle_event` calls.
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// One event per character, for typing text into inputs.
pub fn type_text(text: &str) -> Vec<EventKind> {
    text.chars().map(|c| EventKind::Key(char_key(c))).collect()
}

/// Reducer-driven test harness.
///
/// Holds an [`AppState`] and an action channel. `dispatch` runs the real
/// reducer; `emit` simulates what a component or task would send.
pub struct TestHarness {
    pub state: AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
}

impl TestHarness {
    pub fn new(state: AppState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    /// Get a clone of the action sender for passing to handlers.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.tx.clone()
    }

    /// Run an action through the reducer
    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        reducer(&mut self.state, action)
    }

    /// Dispatch several actions, collecting every effect they return
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Effect> {
        actions
            .into_iter()
            .flat_map(|action| self.dispatch(action).effects)
            .collect()
    }

    pub fn emit(&self, action: Action) {
        let _ = self.tx.send(action);
    }

    /// Drain all emitted actions from the channel.
    pub fn drain_emitted(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain emitted actions of one category; the rest stay queued.
    pub fn drain_category(&mut self, category: &str) -> Vec<Action> {
        let (matching, rest): (Vec<_>, Vec<_>) = self
            .drain_emitted()
            .into_iter()
            .partition(|action| action.category() == Some(category));
        for action in rest {
            let _ = self.tx.send(action);
        }
        matching
    }

    /// Feed emitted actions back through the reducer, as the runtime would
    pub fn dispatch_emitted(&mut self) -> Vec<Effect> {
        let actions = self.drain_emitted();
        self.dispatch_all(actions)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

/// Renders into an in-memory terminal.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test backend cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer.
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("test draw: {e}"));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row.
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        let buffer = self.render(draw);
        buffer_to_string_plain(buffer)
    }
}

/// Buffer text without styling; trailing spaces are trimmed per row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Assert that a specific action was emitted.
///
/// ```ignore
/// assert_emitted!(actions, Action::NavigateTo(f) if f == "#movie=550");
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that a specific action was NOT emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Find and return the first action matching a pattern.
#[macro_export]
macro_rules! find_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().find(|a| matches!(a, $pattern $(if $guard)?))
    };
}

/// Count how many actions match a pattern.
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
