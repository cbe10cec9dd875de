// EditorTestHarness - Virtual terminal environment for E2E testing

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jot::config::Config;
use jot::input::key::{self, InputEvent};
use jot::input::modal::Mode;
use jot::model::cursor::Position;
use jot::session::EditorSession;
use jot::view::render::{render_session, ScreenLayout};
use ratatui::layout::Rect;
use ratatui::{backend::TestBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Virtual editor driven through the same key translation as the binary
pub struct EditorTestHarness {
    session: EditorSession,
    terminal: Terminal<TestBackend>,
    config: Config,
    layout: ScreenLayout,

    /// Set once the quit key has been pressed
    quit_requested: bool,

    /// Error from the most recent input, if it failed
    last_error: Option<String>,

    /// Scratch directory for files created by a test
    temp_dir: TempDir,
}

impl EditorTestHarness {
    /// Create new test harness over an empty scratch buffer
    pub fn new(width: u16, height: u16) -> io::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    /// Create with custom config
    pub fn with_config(width: u16, height: u16, config: Config) -> io::Result<Self> {
        let layout = Self::layout_for(width, height, &config);
        let session = EditorSession::new(layout.editor, config.keys.clone());
        Self::from_session(width, height, config, session)
    }

    /// Create with a buffer pre-filled from `text`
    pub fn with_text(width: u16, height: u16, text: &str) -> io::Result<Self> {
        let mut harness = Self::new(width, height)?;
        let path = harness.temp_path("initial.txt");
        std::fs::write(&path, text)?;
        harness.open_file(&path)?;
        Ok(harness)
    }

    fn from_session(
        width: u16,
        height: u16,
        config: Config,
        session: EditorSession,
    ) -> io::Result<Self> {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;
        let layout = Self::layout_for(width, height, &config);

        let mut harness = EditorTestHarness {
            session,
            terminal,
            config,
            layout,
            quit_requested: false,
            last_error: None,
            temp_dir: TempDir::new()?,
        };
        harness.render()?;
        Ok(harness)
    }

    fn layout_for(width: u16, height: u16, config: &Config) -> ScreenLayout {
        ScreenLayout::compute(
            Rect::new(0, 0, width, height),
            config.editor.show_status_bar,
        )
    }

    /// Path inside the harness's temporary directory
    pub fn temp_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Replace the session with one loaded from `path`
    pub fn open_file(&mut self, path: &Path) -> io::Result<()> {
        self.session = EditorSession::load(path, self.layout.editor, self.config.keys.clone());
        self.render()
    }

    /// Simulate a key press
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<()> {
        self.dispatch(KeyEvent::new(code, modifiers));
        self.render()
    }

    /// Send the same key press multiple times, rendering once at the end
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> io::Result<()> {
        for _ in 0..count {
            self.dispatch(KeyEvent::new(code, modifiers));
        }
        self.render()
    }

    /// Simulate typing a string of text; `\n` is sent as Enter
    pub fn type_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            let event = match ch {
                '\n' => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
                _ => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
            };
            self.dispatch(event);
        }
        self.render()
    }

    pub fn press_escape(&mut self) -> io::Result<()> {
        self.send_key(KeyCode::Esc, KeyModifiers::NONE)
    }

    pub fn press_backspace(&mut self) -> io::Result<()> {
        self.send_key(KeyCode::Backspace, KeyModifiers::NONE)
    }

    /// Ctrl+<save key>
    pub fn save(&mut self) -> io::Result<()> {
        let key = self.session.keys().save;
        self.send_key(KeyCode::Char(key), KeyModifiers::CONTROL)
    }

    /// Handle one key the way the main loop does
    fn dispatch(&mut self, key_event: KeyEvent) {
        let Some(event) = key::translate(&key_event, self.session.keys()) else {
            return;
        };
        if event == InputEvent::Quit {
            self.quit_requested = true;
            return;
        }

        self.last_error = None;
        if let Err(e) = self.session.handle_input(event) {
            let message = format!("{e:#}");
            self.session
                .set_status_message(format!("save failed: {message}"));
            self.last_error = Some(message);
        }
    }

    /// Force a render cycle
    pub fn render(&mut self) -> io::Result<()> {
        let session = &self.session;
        let layout = &self.layout;
        self.terminal
            .draw(|frame| render_session(frame, session, layout))?;
        Ok(())
    }

    /// Resize the virtual terminal and the session's box
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.terminal.backend_mut().resize(width, height);
        self.layout = Self::layout_for(width, height, &self.config);
        self.session.resize(self.layout.editor);
        self.render()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    /// Buffer lines as strings
    pub fn buffer_lines(&self) -> Vec<String> {
        self.session.buffer().to_strings()
    }

    /// Verify buffer content matches expected lines
    pub fn assert_buffer_lines(&self, expected: &[&str]) {
        let actual = self.buffer_lines();
        assert_eq!(
            actual, expected,
            "Buffer content mismatch\nScreen content:\n{}",
            self.screen_to_string()
        );
    }

    /// Cursor in buffer coordinates
    pub fn cursor_position(&self) -> Position {
        self.session.cursor_position()
    }

    /// Terminal caret as set by the last render
    pub fn screen_cursor_position(&mut self) -> (u16, u16) {
        let position = self
            .terminal
            .get_cursor_position()
            .unwrap_or_default();
        (position.x, position.y)
    }

    /// Get the current terminal buffer (what would be displayed)
    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.terminal.backend().buffer()
    }

    /// Get text at specific cell position
    pub fn get_cell(&self, x: u16, y: u16) -> Option<String> {
        self.buffer()
            .cell((x, y))
            .map(|cell| cell.symbol().to_string())
    }

    /// Get the style (color, modifiers) of a specific cell
    pub fn get_cell_style(&self, x: u16, y: u16) -> Option<ratatui::style::Style> {
        self.buffer().cell((x, y)).map(|cell| cell.style())
    }

    /// Get the text content of a specific screen row
    pub fn get_row_text(&self, y: u16) -> String {
        let width = self.buffer().area.width;
        (0..width)
            .filter_map(|x| self.get_cell(x, y))
            .collect()
    }

    /// Bottom row of the terminal
    pub fn get_status_bar(&self) -> String {
        let height = self.buffer().area.height;
        self.get_row_text(height.saturating_sub(1))
    }

    /// Get entire screen as string (for debugging)
    pub fn screen_to_string(&self) -> String {
        let height = self.buffer().area.height;
        (0..height)
            .map(|y| self.get_row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }
}
