use crate::model::buffer::TextBuffer;
use crate::model::cursor::{Cursor, Position};
use crate::view::viewport::{BoundingBox, Viewport};

/// The editable document: buffer, cursor and viewport
///
/// Every editing operation mutates the buffer first and then routes the
/// cursor through `Cursor::move_by`, which keeps it inside the buffer and
/// scrolls the viewport to follow it.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub(crate) buffer: TextBuffer,
    pub(crate) cursor: Cursor,
    pub(crate) viewport: Viewport,

    /// Set by every buffer mutation, cleared by the session after a save
    pub(crate) modified: bool,
}

impl EditorState {
    pub fn new(buffer: TextBuffer, bbox: BoundingBox) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport: Viewport::new(bbox),
            modified: false,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor_position(&self) -> Position {
        self.cursor.position()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Move the cursor by a delta, saturating at the buffer edges
    pub fn move_cursor(&mut self, dx: isize, dy: isize) -> Position {
        self.cursor.move_by(dx, dy, &self.buffer, &mut self.viewport)
    }

    /// Insert a character at the cursor and step past it
    pub fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.position();
        if self.buffer.insert_char(pos.row, pos.col, ch) {
            self.modified = true;
            self.move_cursor(1, 0);
        }
    }

    /// Delete the character before the cursor; nothing happens at column 0
    pub fn erase(&mut self) {
        let pos = self.cursor.position();
        if self.buffer.delete_char(pos.row, pos.col) {
            self.modified = true;
            self.move_cursor(-1, 0);
        }
    }

    /// Split the line at the cursor and move to the start of the new line
    pub fn break_line(&mut self) {
        let pos = self.cursor.position();
        if self.buffer.insert_line_break_at(pos.row, pos.col) {
            self.modified = true;
            self.move_cursor(-(pos.col as isize), 1);
        }
    }

    /// Open an empty line below the cursor's line and move onto it
    pub fn open_line_below(&mut self) {
        let pos = self.cursor.position();
        if self.buffer.insert_line_after(pos.row) {
            self.modified = true;
            self.move_cursor(0, 1);
        }
    }

    /// Delete the cursor's line and revalidate the cursor
    ///
    /// The cursor keeps its row, which now holds the line that followed; on
    /// the last row it clamps to the new last line.
    pub fn delete_line(&mut self) {
        let pos = self.cursor.position();
        let changed = !self.buffer.is_blank();
        if self.buffer.delete_line(pos.row) && changed {
            self.modified = true;
        }
        self.move_cursor(0, 0);
    }

    /// Replace the viewport box and bring the cursor back into view
    pub fn resize(&mut self, bbox: BoundingBox) {
        self.viewport.set_box(bbox);
        self.move_cursor(0, 0);
    }

    /// Character shown at a window cell, if any
    pub fn cell_at(&self, x: isize, y: isize) -> Option<char> {
        let (col, row) = self.viewport.window_to_buffer(x, y)?;
        self.buffer.char_at(col, row)
    }

    /// Cursor position in window coordinates
    pub fn cursor_window_position(&self) -> (isize, isize) {
        let pos = self.cursor.position();
        self.viewport.buffer_to_window(pos.col, pos.row)
    }
}
