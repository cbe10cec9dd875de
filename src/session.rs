//! Editor session: one document bound to an optional file path
//!
//! The session is the only owner of the buffer, cursor, viewport and mode.
//! It loads the file once at startup, feeds input events through the modal
//! state machine, performs saves the state machine asks for, and answers the
//! queries the renderer needs (cell contents, caret position, status line).

use crate::config::KeyConfig;
use crate::input::handler::{DeferredAction, InputContext, InputResult};
use crate::input::key::InputEvent;
use crate::input::modal::{ModalInput, Mode};
use crate::model::buffer::TextBuffer;
use crate::model::cursor::Position;
use crate::state::EditorState;
use crate::view::viewport::{BoundingBox, Viewport};
use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};

/// How the session's buffer came to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// No path was given
    Scratch,
    /// The file was read successfully
    Loaded,
    /// The file does not exist yet; it will be created on save
    NewFile,
    /// The file exists but could not be read; editing starts empty
    Unreadable(String),
}

pub struct EditorSession {
    state: EditorState,
    input: ModalInput,
    path: Option<PathBuf>,
    origin: LoadOrigin,

    /// One-shot message shown next to the status text until the next input
    status_message: Option<String>,

    /// A save over an unreadable file was refused once; the next consecutive
    /// save goes through
    overwrite_armed: bool,
}

impl EditorSession {
    /// Session over an empty scratch buffer with no path
    pub fn new(bbox: BoundingBox, keys: KeyConfig) -> Self {
        Self::with_buffer(TextBuffer::new(), None, LoadOrigin::Scratch, bbox, keys)
    }

    /// Session over the contents of `path`
    ///
    /// Never fails: a missing or unreadable file yields an empty buffer and
    /// the outcome is recorded in `origin()`.
    pub fn load<P: AsRef<Path>>(path: P, bbox: BoundingBox, keys: KeyConfig) -> Self {
        let path = path.as_ref();
        let (buffer, origin) = match TextBuffer::load_from_file(path) {
            Ok(buffer) => {
                tracing::info!(
                    "Loaded {} ({} lines)",
                    path.display(),
                    buffer.line_count()
                );
                (buffer, LoadOrigin::Loaded)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("{} does not exist, starting a new file", path.display());
                (TextBuffer::new(), LoadOrigin::NewFile)
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                (TextBuffer::new(), LoadOrigin::Unreadable(e.to_string()))
            }
        };
        Self::with_buffer(buffer, Some(path.to_path_buf()), origin, bbox, keys)
    }

    /// Session over an existing buffer
    pub fn with_buffer(
        buffer: TextBuffer,
        path: Option<PathBuf>,
        origin: LoadOrigin,
        bbox: BoundingBox,
        keys: KeyConfig,
    ) -> Self {
        Self {
            state: EditorState::new(buffer, bbox),
            input: ModalInput::new(keys),
            path,
            origin,
            status_message: None,
            overwrite_armed: false,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        self.state.buffer()
    }

    pub fn viewport(&self) -> &Viewport {
        self.state.viewport()
    }

    pub fn cursor_position(&self) -> Position {
        self.state.cursor_position()
    }

    pub fn mode(&self) -> Mode {
        self.input.mode()
    }

    pub fn keys(&self) -> &KeyConfig {
        self.input.keys()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }

    pub fn is_modified(&self) -> bool {
        self.state.is_modified()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Process one input event to completion
    ///
    /// A failed save is returned as an error; the buffer is left untouched
    /// and the mode does not change.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<InputResult> {
        self.status_message = None;
        if event != InputEvent::Save {
            self.overwrite_armed = false;
        }

        let mut ctx = InputContext::new();
        let result = self.input.handle(event, &mut self.state, &mut ctx);
        if !result.is_consumed() {
            tracing::trace!("{:?} ignored in {} mode", event, self.mode());
        }

        for action in ctx.drain() {
            match action {
                DeferredAction::Save => self.save()?,
            }
        }
        Ok(result)
    }

    /// Write the buffer to the session's path
    ///
    /// If the file existed but could not be read, the buffer never showed its
    /// contents, so the first save is refused and only a second save in a row
    /// overwrites it.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            anyhow::bail!(io::Error::new(
                io::ErrorKind::NotFound,
                "No file path associated with this session",
            ));
        };

        if let LoadOrigin::Unreadable(reason) = &self.origin {
            if !self.overwrite_armed {
                self.overwrite_armed = true;
                tracing::warn!("Refusing to overwrite unreadable {}", path.display());
                anyhow::bail!(
                    "{} could not be read ({}); save again to overwrite it",
                    path.display(),
                    reason
                );
            }
        }
        self.save_to(path)
    }

    /// Write the buffer to `path` and make it the session's path
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Err(e) = self.state.buffer.save_to_file(path) {
            tracing::error!("Save failed: {:#}", e);
            return Err(e);
        }

        let lines = self.state.buffer.line_count();
        tracing::info!("Wrote {} lines to {}", lines, path.display());

        self.state.modified = false;
        self.overwrite_armed = false;
        self.origin = LoadOrigin::Loaded;
        self.path = Some(path.to_path_buf());
        self.status_message = Some(format!(
            "wrote {} line{} to {}",
            lines,
            if lines == 1 { "" } else { "s" },
            path.display()
        ));
        Ok(())
    }

    /// Move the viewport to a new box and reconcile the cursor
    pub fn resize(&mut self, bbox: BoundingBox) {
        tracing::debug!("resize to {:?}", bbox);
        self.state.resize(bbox);
    }

    /// Character at a window cell, `None` past the end of a line or the buffer
    pub fn cell_at(&self, x: isize, y: isize) -> Option<char> {
        self.state.cell_at(x, y)
    }

    /// Cursor position in absolute screen cells
    pub fn cursor_screen_position(&self) -> (u16, u16) {
        let (wx, wy) = self.state.cursor_window_position();
        let (sx, sy) = self.state.viewport().window_to_screen(wx, wy);
        (to_cell(sx), to_cell(sy))
    }

    /// Path, load note, modified marker and mode, e.g. `notes.txt [+] [Insert Mode]`
    pub fn status_text(&self) -> String {
        let mut parts = Vec::new();
        if let Some(path) = &self.path {
            parts.push(path.display().to_string());
        }
        match &self.origin {
            LoadOrigin::NewFile => parts.push("[new file]".to_string()),
            LoadOrigin::Unreadable(reason) => parts.push(format!("[unreadable: {reason}]")),
            LoadOrigin::Scratch | LoadOrigin::Loaded => {}
        }
        if self.is_modified() {
            parts.push("[+]".to_string());
        }
        parts.push(format!("[{} Mode]", self.mode()));
        parts.join(" ")
    }

    /// Status text followed by the pending status message, if any
    pub fn status_line(&self) -> String {
        match self.status_message() {
            Some(message) => format!("{}  {}", self.status_text(), message),
            None => self.status_text(),
        }
    }
}

fn to_cell(value: isize) -> u16 {
    value.clamp(0, u16::MAX as isize) as u16
}
