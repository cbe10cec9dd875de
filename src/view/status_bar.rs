//! Status bar rendering

use crate::session::EditorSession;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the one-line status bar
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Style used for the status text
    pub fn style() -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    /// Render the session's status line, left aligned, into `area`
    pub fn render_status_bar(frame: &mut Frame, area: Rect, session: &EditorSession) {
        let line = Line::from(Span::styled(session.status_line(), Self::style()));
        frame.render_widget(Paragraph::new(line), area);
    }
}
