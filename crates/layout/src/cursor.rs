//! Explicit page/position state threaded through every placement step.

/// Where the next block of content goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    /// Zero-based index into the document's page sequence.
    pub page_index: usize,
    /// Distance from the top edge of the page, in millimetres.
    pub y: f32,
}

impl LayoutCursor {
    pub fn new(page_index: usize, y: f32) -> Self {
        Self { page_index, y }
    }

    /// The cursor moved down by `dy`.
    pub fn advanced(self, dy: f32) -> Self {
        Self {
            y: self.y + dy,
            ..self
        }
    }

    /// The cursor at vertical offset `y` on the same page.
    pub fn at(self, y: f32) -> Self {
        Self { y, ..self }
    }

    /// The cursor reset to `top` on a freshly started page.
    pub fn on_new_page(self, page_index: usize, top: f32) -> Self {
        Self { page_index, y: top }
    }
}

/// Decides when a block must move to a new page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageBreakPolicy {
    /// Break before a block whose top is already past `threshold`. The block's
    /// own height is ignored, so one block is never split but may overhang.
    StartThreshold { threshold: f32, restart_y: f32 },
    /// Break before a block whose bottom would cross `limit`.
    BottomLimit { limit: f32, restart_y: f32 },
}

impl PageBreakPolicy {
    pub fn should_break(&self, cursor: &LayoutCursor, block_height: f32) -> bool {
        // Tolerance for accumulated float error in cursor arithmetic.
        const EPSILON: f32 = 0.01;
        match *self {
            PageBreakPolicy::StartThreshold { threshold, .. } => cursor.y > threshold + EPSILON,
            PageBreakPolicy::BottomLimit { limit, .. } => cursor.y + block_height > limit + EPSILON,
        }
    }

    /// Where content resumes on the new page.
    pub fn restart_y(&self) -> f32 {
        match *self {
            PageBreakPolicy::StartThreshold { restart_y, .. }
            | PageBreakPolicy::BottomLimit { restart_y, .. } => restart_y,
        }
    }
}
