//! What a buffer character looks like on screen
//!
//! Every buffer column owns exactly one terminal cell. Characters that would
//! not occupy exactly one cell, or that the terminal would interpret instead
//! of print, are shown as a one-cell stand-in. The buffer itself is never
//! changed.

use unicode_width::UnicodeWidthChar;

/// Shown for a tab
pub const TAB_SYMBOL: char = '→';

/// Shown for characters wider or narrower than one cell, and for C1 controls
pub const PLACEHOLDER_SYMBOL: char = '\u{FFFD}';

/// One-cell symbol painted for `ch`
///
/// C0 controls and DEL map to their Unicode control pictures (`␛` for ESC).
pub fn cell_symbol(ch: char) -> char {
    match ch {
        '\t' => TAB_SYMBOL,
        '\u{00}'..='\u{1F}' => char::from_u32(0x2400 + ch as u32).unwrap_or(PLACEHOLDER_SYMBOL),
        '\u{7F}' => '\u{2421}',
        c if c.is_control() => PLACEHOLDER_SYMBOL,
        c => match UnicodeWidthChar::width(c) {
            Some(1) => c,
            _ => PLACEHOLDER_SYMBOL,
        },
    }
}
