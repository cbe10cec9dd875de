//! Screen composition: editor area, status bar and terminal caret

use crate::session::EditorSession;
use crate::view::display::cell_symbol;
use crate::view::status_bar::StatusBarRenderer;
use crate::view::viewport::BoundingBox;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

/// Where the editor box and status bar go on a terminal of a given size
///
/// The editor takes every row but the last, which belongs to the status
/// bar. Without a status bar (or on a one-row terminal) the editor takes the
/// whole area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub editor: BoundingBox,
    pub status: Option<Rect>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, show_status_bar: bool) -> Self {
        let (editor_area, status) = if show_status_bar && area.height >= 2 {
            let editor = Rect::new(area.x, area.y, area.width, area.height - 1);
            let status = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
            (editor, Some(status))
        } else {
            (area, None)
        };

        let editor = BoundingBox::from_rect(editor_area)
            .unwrap_or_else(|| BoundingBox::new(area.x, area.y, area.x, area.y));
        Self { editor, status }
    }
}

/// Draw the whole session into a frame
pub fn render_session(frame: &mut Frame, session: &EditorSession, layout: &ScreenLayout) {
    render_editor(frame, session);

    if let Some(status_area) = layout.status {
        StatusBarRenderer::render_status_bar(frame, status_area, session);
    }

    let (x, y) = session.cursor_screen_position();
    frame.set_cursor_position(Position::new(x, y));
}

/// Paint every cell of the session's box from the buffer, one cell per column
fn render_editor(frame: &mut Frame, session: &EditorSession) {
    let viewport = session.viewport();
    let bbox = viewport.bounding_box();
    let buf = frame.buffer_mut();

    for sy in bbox.top..=bbox.bottom {
        for sx in bbox.left..=bbox.right {
            let (wx, wy) = viewport.screen_to_window(sx as isize, sy as isize);
            if let Some(ch) = session.cell_at(wx, wy) {
                if let Some(cell) = buf.cell_mut((sx, sy)) {
                    cell.set_char(cell_symbol(ch));
                }
            }
        }
    }
}
