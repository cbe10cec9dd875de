/// Line-oriented text buffer
///
/// The buffer is a plain vector of lines, each line a vector of code points.
/// Every mutation keeps the buffer non-empty: removing the last remaining line
/// leaves a single empty line behind.
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io;
use std::path::Path;

/// Line terminator used when serializing the buffer
pub const LINE_TERMINATOR: char = '\n';

/// A single line of text, indexed by code point
pub type Line = Vec<char>;

/// The text buffer: an ordered, never-empty sequence of lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Line>,
}

impl TextBuffer {
    /// Create a buffer holding one empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
        }
    }

    /// Build a buffer from line-delimited text
    ///
    /// Lines are split on `\n`; a `\r` directly before the terminator is
    /// dropped. A trailing terminator produces a final empty line, so that
    /// `from_text(&b.to_text()) == b` for every buffer.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split(LINE_TERMINATOR)
            .map(|line| line.strip_suffix('\r').unwrap_or(line).chars().collect())
            .collect();
        Self { lines }
    }

    /// Build a buffer from individual lines (an empty iterator yields one empty line)
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines: Vec<Line> = lines
            .into_iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        if lines.is_empty() {
            lines.push(Line::new());
        }
        Self { lines }
    }

    /// Read a file into a fresh buffer
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily, with a warning.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            tracing::warn!(
                "{} is not valid UTF-8; invalid bytes replaced with U+FFFD",
                path.display()
            );
        }
        Ok(Self::from_text(&text))
    }

    /// Write the buffer to `path`, overwriting any existing file
    ///
    /// The write is a single `std::fs::write`; an interrupted write may leave
    /// the file truncated.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_text())
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Serialize the buffer: lines joined by a single terminator, none after the last
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                text.push(LINE_TERMINATOR);
            }
            text.extend(line.iter());
        }
        text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, row: usize) -> Option<&[char]> {
        self.lines.get(row).map(Vec::as_slice)
    }

    /// Length of a line in code points (0 for rows past the end)
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, <[char]>::len)
    }

    /// All lines as strings, mostly useful for assertions
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(|line| line.iter().collect()).collect()
    }

    /// Character at buffer coordinate `(col, row)`, if any
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.line(row)?.get(col).copied()
    }

    /// True when the buffer is a single empty line
    pub fn is_blank(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Insert `ch` before column `col` of line `row`
    ///
    /// `col == line_len(row)` appends. Returns false (and changes nothing) for
    /// out-of-range coordinates.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> bool {
        match self.lines.get_mut(row) {
            Some(line) if col <= line.len() => {
                line.insert(col, ch);
                true
            }
            _ => false,
        }
    }

    /// Remove the character immediately before column `col`
    ///
    /// At column 0 this is a no-op: lines are never merged.
    pub fn delete_char(&mut self, row: usize, col: usize) -> bool {
        match self.lines.get_mut(row) {
            Some(line) if col > 0 && col <= line.len() => {
                line.remove(col - 1);
                true
            }
            _ => false,
        }
    }

    /// Insert an empty line directly after `row`
    pub fn insert_line_after(&mut self, row: usize) -> bool {
        if row >= self.lines.len() {
            return false;
        }
        self.lines.insert(row + 1, Line::new());
        true
    }

    /// Split line `row` at `col`
    ///
    /// The head stays at `row` and the tail (possibly empty) becomes the new
    /// line at `row + 1`.
    pub fn insert_line_break_at(&mut self, row: usize, col: usize) -> bool {
        let tail = match self.lines.get_mut(row) {
            Some(line) if col <= line.len() => line.split_off(col),
            _ => return false,
        };
        self.lines.insert(row + 1, tail);
        true
    }

    /// Remove line `row`; removing the only line leaves one empty line
    pub fn delete_line(&mut self, row: usize) -> bool {
        if row >= self.lines.len() {
            return false;
        }
        if self.lines.len() == 1 {
            self.lines[0].clear();
        } else {
            self.lines.remove(row);
        }
        true
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
