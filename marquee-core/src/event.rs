//! Terminal events delivered to components

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// The event payload components receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    /// Scroll wheel, negative is up
    Scroll { column: u16, row: u16, delta: isize },
    Resize(u16, u16),
    /// Periodic tick for the loading spinner
    Tick,
}

impl EventKind {
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Ctrl+C quits from anywhere, including text inputs
    pub fn is_interrupt(&self) -> bool {
        matches!(
            self,
            EventKind::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL)
        )
    }
}

/// Parse a key description such as `"ctrl+p"`, `"shift+tab"` or `"enter"`.
///
/// Returns `None` for unknown key names.
/// Single characters keep their case (`"G"` is not `"g"`).
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return None;
    }

    let lower = key_str.to_lowercase();
    if lower == "shift+tab" || lower == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    // A lone "+" is a key, not a separator
    if key_str == "+" {
        return Some(press(KeyCode::Char('+'), KeyModifiers::empty()));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim().to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let key_part = key_part.trim();
    if key_part.chars().count() == 1 {
        let c = key_part.chars().next()?;
        return Some(press(KeyCode::Char(c), modifiers));
    }

    let code = match key_part.to_lowercase().as_str() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_and_special() {
        assert_eq!(parse_key_string("q").map(|k| k.code), Some(KeyCode::Char('q')));
        assert_eq!(parse_key_string("Enter").map(|k| k.code), Some(KeyCode::Enter));
        assert_eq!(parse_key_string(":").map(|k| k.code), Some(KeyCode::Char(':')));
        assert_eq!(parse_key_string("+").map(|k| k.code), Some(KeyCode::Char('+')));
        assert_eq!(parse_key_string("space").map(|k| k.code), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key_string("G").map(|k| k.code), Some(KeyCode::Char('G')));
    }

    #[test]
    fn test_parse_modifiers() {
        let k = parse_key_string("ctrl+c").unwrap();
        assert_eq!(k.code, KeyCode::Char('c'));
        assert!(k.modifiers.contains(KeyModifiers::CONTROL));

        let k = parse_key_string("shift+tab").unwrap();
        assert_eq!(k.code, KeyCode::BackTab);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper+x").is_none());
        assert!(parse_key_string("notakey").is_none());
    }

    #[test]
    fn test_is_interrupt() {
        let ctrl_c = EventKind::Key(parse_key_string("ctrl+c").unwrap());
        assert!(ctrl_c.is_interrupt());
        let c = EventKind::Key(parse_key_string("c").unwrap());
        assert!(!c.is_interrupt());
        assert!(!EventKind::Tick.is_interrupt());
    }
}
