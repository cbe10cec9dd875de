//! Viewport: the visible window into the buffer
//!
//! Three coordinate spaces are involved:
//!
//! - **buffer** `(col, row)`: indices into the text buffer
//! - **window** `(x, y)`: relative to the box's top-left cell, after
//!   subtracting the scroll offset (`window = buffer - offset`)
//! - **screen** `(x, y)`: absolute terminal cells (`screen = window + box origin`)
//!
//! Window coordinates are signed because a buffer position left of or above
//! the offset projects to a negative window cell.

use ratatui::layout::Rect;

/// Inclusive screen-space rectangle `[left, right] x [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u16,
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
}

impl BoundingBox {
    /// Create a box from two corners; the corners are normalized so that
    /// `left <= right` and `top <= bottom`
    pub fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Self {
            left: left.min(right),
            top: top.min(bottom),
            right: left.max(right),
            bottom: top.max(bottom),
        }
    }

    /// Box covering a ratatui area, or `None` for an empty area
    pub fn from_rect(rect: Rect) -> Option<Self> {
        if rect.width == 0 || rect.height == 0 {
            return None;
        }
        Some(Self::new(
            rect.x,
            rect.y,
            rect.x + rect.width - 1,
            rect.y + rect.height - 1,
        ))
    }

    /// Distance between the corners: `(right - left, bottom - top)`
    ///
    /// The box spans `extent + 1` cells along each axis.
    pub fn extent(&self) -> (u16, u16) {
        (self.right - self.left, self.bottom - self.top)
    }

}

/// The viewport - what portion of the buffer is visible, and where
#[derive(Debug, Clone)]
pub struct Viewport {
    bbox: BoundingBox,

    /// Buffer column shown in the box's leftmost window column
    offset_x: usize,

    /// Buffer row shown in the box's top window row
    offset_y: usize,
}

impl Viewport {
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Replace the box; the offset is left alone until the next `reconcile`
    pub fn set_box(&mut self, bbox: BoundingBox) {
        self.bbox = bbox;
    }

    /// Current scroll offset as `(ox, oy)` in buffer coordinates
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_y)
    }

    pub fn buffer_to_window(&self, col: usize, row: usize) -> (isize, isize) {
        (
            col as isize - self.offset_x as isize,
            row as isize - self.offset_y as isize,
        )
    }

    /// Buffer coordinate shown at a window cell, or `None` when the cell
    /// lies before the buffer origin
    pub fn window_to_buffer(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        let col = self.offset_x.checked_add_signed(x)?;
        let row = self.offset_y.checked_add_signed(y)?;
        Some((col, row))
    }

    pub fn window_to_screen(&self, x: isize, y: isize) -> (isize, isize) {
        (x + self.bbox.left as isize, y + self.bbox.top as isize)
    }

    pub fn screen_to_window(&self, x: isize, y: isize) -> (isize, isize) {
        (x - self.bbox.left as isize, y - self.bbox.top as isize)
    }

    /// Whether a window cell falls inside the box
    pub fn contains_window(&self, x: isize, y: isize) -> bool {
        let (max_x, max_y) = self.bbox.extent();
        (0..=max_x as isize).contains(&x) && (0..=max_y as isize).contains(&y)
    }

    /// Shift the offset so that the window cell `(x, y)` ends up inside the box
    ///
    /// Each axis moves by exactly its overflow, so the cell lands on the
    /// nearest edge. Returns true if the offset changed.
    pub fn reconcile(&mut self, x: isize, y: isize) -> bool {
        if self.contains_window(x, y) {
            return false;
        }

        let (max_x, max_y) = self.bbox.extent();
        let dx = overflow(x, max_x as isize);
        let dy = overflow(y, max_y as isize);

        self.offset_x = self.offset_x.saturating_add_signed(dx);
        self.offset_y = self.offset_y.saturating_add_signed(dy);
        tracing::trace!(
            "viewport scrolled by ({}, {}) to offset ({}, {})",
            dx,
            dy,
            self.offset_x,
            self.offset_y
        );
        true
    }
}

/// Signed distance from `value` to the range `[0, max]` (0 when inside)
fn overflow(value: isize, max: isize) -> isize {
    if value < 0 {
        value
    } else if value > max {
        value - max
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_normalizes_corners() {
        let bbox = BoundingBox::new(10, 8, 2, 1);
        assert_eq!(bbox, BoundingBox::new(2, 1, 10, 8));
        assert_eq!(bbox.extent(), (8, 7));
    }

    #[test]
    fn test_box_from_rect() {
        let bbox = BoundingBox::from_rect(Rect::new(0, 0, 80, 23)).unwrap();
        assert_eq!(bbox, BoundingBox::new(0, 0, 79, 22));
        assert!(BoundingBox::from_rect(Rect::new(0, 0, 0, 5)).is_none());
    }

    #[test]
    fn test_buffer_window_translation() {
        let mut vp = Viewport::new(BoundingBox::new(0, 0, 9, 4));
        assert_eq!(vp.buffer_to_window(3, 2), (3, 2));

        vp.reconcile(0, 7);
        assert_eq!(vp.offset(), (0, 3));
        assert_eq!(vp.buffer_to_window(3, 2), (3, -1));
        assert_eq!(vp.window_to_buffer(3, -1), Some((3, 2)));
        assert_eq!(vp.window_to_buffer(0, -4), None);
    }

    #[test]
    fn test_window_screen_translation() {
        let vp = Viewport::new(BoundingBox::new(4, 2, 20, 10));
        assert_eq!(vp.window_to_screen(0, 0), (4, 2));
        assert_eq!(vp.screen_to_window(6, 5), (2, 3));
        assert_eq!(vp.screen_to_window(0, 0), (-4, -2));
    }

    #[test]
    fn test_reconcile_inside_box_is_noop() {
        let mut vp = Viewport::new(BoundingBox::new(0, 0, 9, 4));
        assert!(!vp.reconcile(9, 4));
        assert!(!vp.reconcile(0, 0));
        assert_eq!(vp.offset(), (0, 0));
    }

    #[test]
    fn test_reconcile_is_sticky_edge() {
        let mut vp = Viewport::new(BoundingBox::new(0, 0, 9, 4));

        // One row past the bottom edge scrolls by exactly one row
        assert!(vp.reconcile(0, 5));
        assert_eq!(vp.offset(), (0, 1));

        // Far past the right edge scrolls by the overflow only
        assert!(vp.reconcile(15, 0));
        assert_eq!(vp.offset(), (6, 1));

        // Above the top edge scrolls back up by the overflow
        assert!(vp.reconcile(0, -1));
        assert_eq!(vp.offset(), (6, 0));
    }

    #[test]
    fn test_reconcile_axes_are_independent() {
        let mut vp = Viewport::new(BoundingBox::new(0, 0, 4, 4));
        vp.reconcile(10, 10);
        assert_eq!(vp.offset(), (6, 6));
        vp.reconcile(-2, 3);
        assert_eq!(vp.offset(), (4, 6));
    }

    #[test]
    fn test_set_box_keeps_offset() {
        let mut vp = Viewport::new(BoundingBox::new(0, 0, 9, 9));
        vp.reconcile(0, 12);
        assert_eq!(vp.offset(), (0, 3));

        vp.set_box(BoundingBox::new(0, 0, 9, 2));
        assert_eq!(vp.offset(), (0, 3));
        assert!(!vp.contains_window(0, 9));
    }

    #[test]
    fn test_contains_window() {
        let vp = Viewport::new(BoundingBox::new(5, 5, 7, 6));
        assert!(vp.contains_window(0, 0));
        assert!(vp.contains_window(2, 1));
        assert!(!vp.contains_window(3, 1));
        assert!(!vp.contains_window(-1, 0));
    }
}
