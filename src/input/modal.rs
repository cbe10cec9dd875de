//! Modal input state machine
//!
//! Two modes exist. Navigate (the initial mode) interprets characters as
//! commands; Insert types them into the buffer. Escape always returns to
//! Navigate. Save is accepted in either mode and never changes the mode.

use crate::config::KeyConfig;
use crate::input::handler::{DeferredAction, InputContext, InputResult};
use crate::input::key::InputEvent;
use crate::state::EditorState;
use std::fmt;

/// Editor mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Characters are commands (movement, line deletion, mode switches)
    #[default]
    Navigate,
    /// Characters are inserted at the cursor
    Insert,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Navigate => "Navigate",
            Mode::Insert => "Insert",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Commands reachable from Navigate mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavigateCommand {
    Left,
    Down,
    Up,
    Right,
    Insert,
    OpenBelow,
    DeleteLine,
}

impl NavigateCommand {
    fn from_char(ch: char, keys: &KeyConfig) -> Option<Self> {
        let command = if ch == keys.left {
            Self::Left
        } else if ch == keys.down {
            Self::Down
        } else if ch == keys.up {
            Self::Up
        } else if ch == keys.right {
            Self::Right
        } else if ch == keys.insert {
            Self::Insert
        } else if ch == keys.open_below {
            Self::OpenBelow
        } else if ch == keys.delete_line {
            Self::DeleteLine
        } else {
            return None;
        };
        Some(command)
    }
}

/// Owns the current mode and routes events to the mode's handler
#[derive(Debug, Clone)]
pub struct ModalInput {
    mode: Mode,
    keys: KeyConfig,
}

impl ModalInput {
    pub fn new(keys: KeyConfig) -> Self {
        Self {
            mode: Mode::Navigate,
            keys,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn keys(&self) -> &KeyConfig {
        &self.keys
    }

    /// Handle one event against the document
    ///
    /// Quit is never consumed here; the caller owns process shutdown.
    pub fn handle(
        &mut self,
        event: InputEvent,
        state: &mut EditorState,
        ctx: &mut InputContext,
    ) -> InputResult {
        match event {
            InputEvent::Save => {
                ctx.defer(DeferredAction::Save);
                return InputResult::Consumed;
            }
            InputEvent::Quit => return InputResult::Ignored,
            _ => {}
        }

        match self.mode {
            Mode::Navigate => self.handle_navigate(event, state),
            Mode::Insert => self.handle_insert(event, state),
        }
    }

    fn handle_navigate(&mut self, event: InputEvent, state: &mut EditorState) -> InputResult {
        let InputEvent::Char(ch) = event else {
            return InputResult::Ignored;
        };
        let Some(command) = NavigateCommand::from_char(ch, &self.keys) else {
            return InputResult::Ignored;
        };

        match command {
            NavigateCommand::Left => {
                state.move_cursor(-1, 0);
            }
            NavigateCommand::Down => {
                state.move_cursor(0, 1);
            }
            NavigateCommand::Up => {
                state.move_cursor(0, -1);
            }
            NavigateCommand::Right => {
                state.move_cursor(1, 0);
            }
            NavigateCommand::Insert => self.set_mode(Mode::Insert),
            NavigateCommand::OpenBelow => {
                state.open_line_below();
                self.set_mode(Mode::Insert);
            }
            NavigateCommand::DeleteLine => state.delete_line(),
        }
        InputResult::Consumed
    }

    fn handle_insert(&mut self, event: InputEvent, state: &mut EditorState) -> InputResult {
        match event {
            InputEvent::Char(ch) => state.insert_char(ch),
            InputEvent::Erase => state.erase(),
            InputEvent::LineBreak => state.break_line(),
            InputEvent::Escape => self.set_mode(Mode::Navigate),
            InputEvent::Save | InputEvent::Quit => return InputResult::Ignored,
        }
        InputResult::Consumed
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!("mode {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }
}
