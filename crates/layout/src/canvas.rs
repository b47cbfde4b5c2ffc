//! Page sequence plus the current graphics state.
//!
//! The canvas never tracks a "current position": every primitive takes an
//! explicit page index and box, and callers thread a [`LayoutCursor`] through
//! their own placement logic.
//!
//! [`LayoutCursor`]: crate::LayoutCursor

use crate::LayoutError;
use crate::cursor::{LayoutCursor, PageBreakPolicy};
use crate::elements::{ImageElement, LayoutElement, PaintMode, PositionedElement, RectElement, TextElement};
use crate::fonts::{FontSpec, TextMetrics};
use crate::page::{DocumentLayout, LaidOutPage, PageGeometry, PageKind};
use crate::style::{ComputedStyle, TextAlign};
use crate::text::LineWrapper;
use log::debug;
use quotegen_types::{Color, Rect};
use std::sync::Arc;

/// Horizontal padding between a cell edge and its text.
pub const CELL_PADDING: f32 = 1.0;

/// How a cell is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellOptions {
    pub border: bool,
    pub fill: bool,
    pub align: TextAlign,
    /// Extra width per space character, for justified lines.
    pub word_spacing: f32,
}

impl CellOptions {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bordered() -> Self {
        Self {
            border: true,
            ..Self::default()
        }
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_word_spacing(mut self, word_spacing: f32) -> Self {
        self.word_spacing = word_spacing;
        self
    }
}

pub struct Canvas {
    geometry: PageGeometry,
    metrics: Arc<dyn TextMetrics>,
    pages: Vec<LaidOutPage>,
    style: Arc<ComputedStyle>,
    background: Option<String>,
}

impl Canvas {
    pub fn new(geometry: PageGeometry, metrics: Arc<dyn TextMetrics>) -> Self {
        Self {
            geometry,
            metrics,
            pages: Vec::new(),
            style: Arc::new(ComputedStyle::default()),
            background: None,
        }
    }

    /// Draw `src` stretched over the full page, beneath everything else, on every new page.
    pub fn with_background(mut self, src: impl Into<String>) -> Self {
        self.background = Some(src.into());
        self
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Starts a page and returns its index.
    pub fn add_page(&mut self, kind: PageKind) -> usize {
        let mut page = LaidOutPage::new(kind);
        if let Some(src) = &self.background {
            let full_page = Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height);
            page.elements.push(PositionedElement::new(
                full_page,
                LayoutElement::Image(ImageElement { src: src.clone() }),
                Arc::clone(&self.style),
            ));
        }
        self.pages.push(page);
        let index = self.pages.len() - 1;
        debug!("Started {:?} page {}", kind, index + 1);
        index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[LaidOutPage] {
        &self.pages
    }

    /// Moves `cursor` to a fresh page of the same kind when a block of
    /// `height` would break under `policy`.
    pub fn ensure_room(
        &mut self,
        cursor: LayoutCursor,
        height: f32,
        policy: &PageBreakPolicy,
    ) -> Result<LayoutCursor, LayoutError> {
        if !policy.should_break(&cursor, height) {
            return Ok(cursor);
        }
        let kind = self
            .pages
            .get(cursor.page_index)
            .map(|p| p.kind)
            .ok_or(LayoutError::MissingPage(cursor.page_index))?;
        let page = self.add_page(kind);
        debug!(
            "Block at y={:.1} on page {} moved to page {}",
            cursor.y,
            cursor.page_index + 1,
            page + 1
        );
        Ok(cursor.on_new_page(page, policy.restart_y()))
    }

    pub fn style(&self) -> &ComputedStyle {
        &self.style
    }

    pub fn font(&self) -> FontSpec {
        self.style.font
    }

    pub fn set_font(&mut self, font: FontSpec) {
        if self.style.font != font {
            Arc::make_mut(&mut self.style).font = font;
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        if self.style.fill_color != color {
            Arc::make_mut(&mut self.style).fill_color = color;
        }
    }

    pub fn set_draw_color(&mut self, color: Color) {
        if self.style.draw_color != color {
            Arc::make_mut(&mut self.style).draw_color = color;
        }
    }

    pub fn set_text_color(&mut self, color: Color) {
        if self.style.text_color != color {
            Arc::make_mut(&mut self.style).text_color = color;
        }
    }

    pub fn metrics(&self) -> &dyn TextMetrics {
        self.metrics.as_ref()
    }

    /// Width of `text` in the current font.
    pub fn text_width(&self, text: &str) -> f32 {
        self.metrics.text_width(&self.style.font, text)
    }

    /// A wrapper for the current font with the default safety margin.
    pub fn wrapper(&self, max_width: f32) -> LineWrapper<'_> {
        LineWrapper::new(self.metrics.as_ref(), self.style.font, max_width)
    }

    /// A single-line cell: optional fill and border around `rect`, text
    /// vertically centred and aligned horizontally inside it.
    pub fn cell(
        &mut self,
        page: usize,
        rect: Rect,
        text: &str,
        options: CellOptions,
    ) -> Result<(), LayoutError> {
        let paint = match (options.fill, options.border) {
            (true, true) => Some(PaintMode::FillStroke),
            (true, false) => Some(PaintMode::Fill),
            (false, true) => Some(PaintMode::Stroke),
            (false, false) => None,
        };
        if let Some(paint) = paint {
            self.push(page, rect, LayoutElement::Rectangle(RectElement { paint }))?;
        }

        if text.is_empty() {
            return Ok(());
        }

        let spaces = text.matches(' ').count() as f32;
        let text_width = self.text_width(text) + options.word_spacing * spaces;
        let dx = match options.align {
            TextAlign::Left | TextAlign::Justify => CELL_PADDING,
            TextAlign::Right => rect.width - CELL_PADDING - text_width,
            TextAlign::Center => (rect.width - text_width) / 2.0,
        };
        let text_box = Rect::new(rect.x + dx, rect.y, text_width, rect.height);
        self.push(
            page,
            text_box,
            LayoutElement::Text(TextElement {
                content: text.to_string(),
                word_spacing: options.word_spacing,
            }),
        )
    }

    pub fn line(&mut self, page: usize, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), LayoutError> {
        self.push(page, Rect::new(x1, y1, x2 - x1, y2 - y1), LayoutElement::Line)
    }

    pub fn rect(&mut self, page: usize, rect: Rect, paint: PaintMode) -> Result<(), LayoutError> {
        self.push(page, rect, LayoutElement::Rectangle(RectElement { paint }))
    }

    fn push(&mut self, page: usize, rect: Rect, element: LayoutElement) -> Result<(), LayoutError> {
        let style = Arc::clone(&self.style);
        let target = self
            .pages
            .get_mut(page)
            .ok_or(LayoutError::MissingPage(page))?;
        target.elements.push(PositionedElement::new(rect, element, style));
        Ok(())
    }

    pub fn finish(self) -> DocumentLayout {
        DocumentLayout {
            page_size: self.geometry.size,
            pages: self.pages,
        }
    }
}
