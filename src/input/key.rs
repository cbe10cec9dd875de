//! Translation from terminal key events to editor input events

use crate::config::KeyConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A discrete input event as understood by the editor core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// A single code point
    Char(char),
    /// Erase the character before the cursor
    Erase,
    /// Break the line at the cursor
    LineBreak,
    Escape,
    /// Write the buffer (any mode)
    Save,
    /// Leave the editor; handled by the process loop, not the core
    Quit,
}

/// Classify a crossterm key event
///
/// Returns `None` for key releases and for keys the editor has no use for.
pub fn translate(event: &KeyEvent, keys: &KeyConfig) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Char(c) if event.modifiers == KeyModifiers::CONTROL => {
            if c.eq_ignore_ascii_case(&keys.save) {
                Some(InputEvent::Save)
            } else if c.eq_ignore_ascii_case(&keys.quit) {
                Some(InputEvent::Quit)
            } else {
                None
            }
        }
        KeyCode::Char(c)
            if event.modifiers == KeyModifiers::NONE || event.modifiers == KeyModifiers::SHIFT =>
        {
            Some(InputEvent::Char(c))
        }
        KeyCode::Backspace if event.modifiers.is_empty() => Some(InputEvent::Erase),
        KeyCode::Enter if event.modifiers.is_empty() => Some(InputEvent::LineBreak),
        KeyCode::Esc => Some(InputEvent::Escape),
        _ => None,
    }
}
