//! Cursor position and the clamped movement rules that maintain it

use crate::model::buffer::TextBuffer;
use crate::view::viewport::Viewport;

/// A position in buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// The editing cursor
///
/// `move_by` is the only way to change the position. It never fails: deltas
/// that would leave the buffer saturate at its edges, and the viewport is
/// scrolled so the result stays visible.
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    pos: Position,
}

impl Cursor {
    /// Cursor at the buffer origin
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Move by `(dx, dy)`, clamp into the buffer, then reconcile the viewport
    ///
    /// The row is clamped first so the column is clamped against the length
    /// of the row the cursor actually lands on. `move_by(0, 0, ..)` is used
    /// after buffer mutations purely to revalidate.
    pub fn move_by(
        &mut self,
        dx: isize,
        dy: isize,
        buffer: &TextBuffer,
        viewport: &mut Viewport,
    ) -> Position {
        let last_row = buffer.line_count().saturating_sub(1);
        let row = self.pos.row.saturating_add_signed(dy).min(last_row);
        let col = self.pos.col.saturating_add_signed(dx).min(buffer.line_len(row));

        self.pos = Position::new(col, row);

        let (wx, wy) = viewport.buffer_to_window(col, row);
        viewport.reconcile(wx, wy);

        self.pos
    }
}
