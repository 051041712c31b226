//! Single-line editing shared by the search bar and the address bar

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

/// Result of feeding a key to a [`LineEditor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Text changed to the new value
    Changed(String),
    /// Enter
    Submit,
    /// Esc
    Cancel,
    /// Cursor moved or key ignored
    None,
}

/// Cursor state for a line of text owned elsewhere
///
/// The value lives in application state; the editor only tracks the cursor
/// (a byte index kept on a char boundary) and computes new values.
#[derive(Debug, Default)]
pub struct LineEditor {
    cursor: Option<usize>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in `value`; defaults to the end
    pub fn cursor(&self, value: &str) -> usize {
        let cursor = self.cursor.unwrap_or(value.len()).min(value.len());
        floor_char_boundary(value, cursor)
    }

    /// Forget the cursor so it snaps to the end of the next value
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    pub fn handle_key(&mut self, key: &KeyEvent, value: &str) -> Edit {
        let cursor = self.cursor(value);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor = Some(0);
                    Edit::None
                }
                KeyCode::Char('e') => {
                    self.cursor = Some(value.len());
                    Edit::None
                }
                KeyCode::Char('u') => {
                    self.cursor = Some(0);
                    Edit::Changed(String::new())
                }
                _ => Edit::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = String::with_capacity(value.len() + c.len_utf8());
                next.push_str(&value[..cursor]);
                next.push(c);
                next.push_str(&value[cursor..]);
                self.cursor = Some(cursor + c.len_utf8());
                Edit::Changed(next)
            }
            KeyCode::Backspace => match value[..cursor].char_indices().last() {
                Some((start, _)) => {
                    let mut next = String::with_capacity(value.len());
                    next.push_str(&value[..start]);
                    next.push_str(&value[cursor..]);
                    self.cursor = Some(start);
                    Edit::Changed(next)
                }
                None => Edit::None,
            },
            KeyCode::Delete => match value[cursor..].chars().next() {
                Some(c) => {
                    let mut next = String::with_capacity(value.len());
                    next.push_str(&value[..cursor]);
                    next.push_str(&value[cursor + c.len_utf8()..]);
                    self.cursor = Some(cursor);
                    Edit::Changed(next)
                }
                None => Edit::None,
            },
            KeyCode::Left => {
                self.cursor = Some(
                    value[..cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0),
                );
                Edit::None
            }
            KeyCode::Right => {
                self.cursor = Some(
                    value[cursor..]
                        .chars()
                        .next()
                        .map(|c| cursor + c.len_utf8())
                        .unwrap_or(cursor),
                );
                Edit::None
            }
            KeyCode::Home => {
                self.cursor = Some(0);
                Edit::None
            }
            KeyCode::End => {
                self.cursor = Some(value.len());
                Edit::None
            }
            KeyCode::Enter => Edit::Submit,
            KeyCode::Esc => Edit::Cancel,
            _ => Edit::None,
        }
    }

    /// Place the terminal cursor inside `area` (the text's first cell)
    pub fn show_cursor(&self, frame: &mut Frame, area: Rect, value: &str) {
        let column = value[..self.cursor(value)].chars().count() as u16;
        let x = area.x.saturating_add(column);
        if x < area.x.saturating_add(area.width) {
            frame.set_cursor_position((x, area.y));
        }
    }
}

fn floor_char_boundary(value: &str, mut index: usize) -> usize {
    while index > 0 && !value.is_char_boundary(index) {
        index -= 1;
    }
    index
}
