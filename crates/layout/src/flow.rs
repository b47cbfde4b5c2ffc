//! Paragraph text placed line by line inside a fixed-width column.

use crate::LayoutError;
use crate::canvas::{CELL_PADDING, Canvas, CellOptions};
use crate::cursor::{LayoutCursor, PageBreakPolicy};
use crate::style::TextAlign;
use quotegen_types::Rect;

/// A column that text flows down: fixed left edge and width, one line every
/// `line_height`, optionally moving to a fresh page when a line would cross the
/// policy's limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFlow {
    pub x: f32,
    pub width: f32,
    pub line_height: f32,
    pub align: TextAlign,
    pub page_break: Option<PageBreakPolicy>,
}

impl TextFlow {
    pub fn new(x: f32, width: f32, line_height: f32) -> Self {
        Self {
            x,
            width,
            line_height,
            align: TextAlign::Left,
            page_break: None,
        }
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_page_break(mut self, policy: PageBreakPolicy) -> Self {
        self.page_break = Some(policy);
        self
    }

    /// Width available to glyphs once both cell paddings are taken off.
    fn text_area(&self) -> f32 {
        self.width - 2.0 * CELL_PADDING
    }

    /// Lays out `text` in the canvas's current font starting at `cursor` and
    /// returns the cursor just below the last line.
    ///
    /// Each `\n` starts a new paragraph; empty paragraphs still take one line.
    pub fn place(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
        text: &str,
    ) -> Result<LayoutCursor, LayoutError> {
        let paragraphs = canvas
            .wrapper(self.width)
            .with_safety_margin(2.0 * CELL_PADDING)
            .wrap_paragraphs(text);

        let mut cursor = cursor;
        for paragraph in &paragraphs {
            let last = paragraph.line_count() - 1;
            for (i, line) in paragraph.iter().enumerate() {
                if let Some(policy) = &self.page_break {
                    cursor = canvas.ensure_room(cursor, self.line_height, policy)?;
                }

                let word_spacing = if self.align == TextAlign::Justify && i < last {
                    self.justify_spacing(canvas, line)
                } else {
                    0.0
                };
                let options = CellOptions::plain()
                    .aligned(self.align)
                    .with_word_spacing(word_spacing);
                let rect = Rect::new(self.x, cursor.y, self.width, self.line_height);
                canvas.cell(cursor.page_index, rect, line, options)?;
                cursor = cursor.advanced(self.line_height);
            }
        }
        Ok(cursor)
    }

    fn justify_spacing(&self, canvas: &Canvas, line: &str) -> f32 {
        let spaces = line.matches(' ').count();
        if spaces == 0 {
            return 0.0;
        }
        let slack = self.text_area() - canvas.text_width(line);
        (slack / spaces as f32).max(0.0)
    }
}
