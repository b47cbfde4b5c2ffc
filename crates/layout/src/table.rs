//! The itemized price table: header, one row per line item, total row.

use crate::LayoutError;
use crate::canvas::{Canvas, CellOptions};
use crate::cursor::{LayoutCursor, PageBreakPolicy};
use crate::fonts::{FontSpec, TextMetrics};
use crate::page::PageKind;
use crate::style::TextAlign;
use crate::text::{LineWrapper, WrappedLines};
use log::{debug, warn};
use quotegen_types::{Color, LineItem, Rect, format_brl};

/// Column widths: item number, quantity, description, unit price, total.
pub const COLUMN_WIDTHS: [f32; 5] = [12.0, 15.0, 75.0, 30.0, 30.0];
pub const HEADER_LABELS: [&str; 5] = ["ITEM", "QUANT", "DESCRIÇÃO", "VALOR UNITÁRIO", "TOTAL"];
pub const TABLE_LEFT: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 10.0;
/// Height of one wrapped description line.
pub const ROW_LINE_HEIGHT: f32 = 5.0;
pub const TOTAL_ROW_HEIGHT: f32 = 10.0;
/// A row starting below this y moves to a new page.
pub const PAGE_BOTTOM_THRESHOLD: f32 = 250.0;
/// Where rows resume on a continuation page.
pub const CONTINUATION_TOP: f32 = 40.0;

const DESCRIPTION_COLUMN: usize = 2;

/// Places table rows on the canvas, starting continuation pages as needed.
///
/// A row is checked against the page-bottom threshold once, before it is
/// placed, so it is never split; a tall row started just above the threshold
/// may overhang the bottom margin.
#[derive(Debug, Clone)]
pub struct TableRowRenderer {
    pub left: f32,
    pub columns: [f32; 5],
    pub policy: PageBreakPolicy,
    pub header_fill: Color,
    pub header_font: FontSpec,
    pub row_font: FontSpec,
    /// y past which a drawn total row is reported as overflowing.
    pub bottom_limit: f32,
}

impl Default for TableRowRenderer {
    fn default() -> Self {
        Self {
            left: TABLE_LEFT,
            columns: COLUMN_WIDTHS,
            policy: PageBreakPolicy::StartThreshold {
                threshold: PAGE_BOTTOM_THRESHOLD,
                restart_y: CONTINUATION_TOP,
            },
            header_fill: Color::gray(200),
            header_font: FontSpec::bold(10.0),
            row_font: FontSpec::regular(9.0),
            bottom_limit: 282.0,
        }
    }
}

impl TableRowRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_fill(mut self, color: Color) -> Self {
        self.header_fill = color;
        self
    }

    pub fn with_bottom_limit(mut self, limit: f32) -> Self {
        self.bottom_limit = limit;
        self
    }

    pub fn table_width(&self) -> f32 {
        self.columns.iter().sum()
    }

    /// Left edge of column `index`.
    fn column_x(&self, index: usize) -> f32 {
        self.left + self.columns[..index].iter().sum::<f32>()
    }

    pub fn description_width(&self) -> f32 {
        self.columns[DESCRIPTION_COLUMN]
    }

    pub fn wrap_description(&self, metrics: &dyn TextMetrics, description: &str) -> WrappedLines {
        LineWrapper::new(metrics, self.row_font, self.description_width()).wrap(description)
    }

    /// Height of a row showing `lines`: one line height per line.
    pub fn row_height(lines: &WrappedLines) -> f32 {
        ROW_LINE_HEIGHT * lines.line_count() as f32
    }

    pub fn measure_row(&self, metrics: &dyn TextMetrics, item: &LineItem) -> f32 {
        Self::row_height(&self.wrap_description(metrics, item.description()))
    }

    /// Header cells, filled and centred. Returns the cursor below the header.
    pub fn render_header(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
    ) -> Result<LayoutCursor, LayoutError> {
        canvas.set_fill_color(self.header_fill);
        canvas.set_font(self.header_font);
        for (i, label) in HEADER_LABELS.iter().enumerate() {
            let rect = Rect::new(self.column_x(i), cursor.y, self.columns[i], HEADER_HEIGHT);
            let options = CellOptions::bordered().filled().aligned(TextAlign::Center);
            canvas.cell(cursor.page_index, rect, label, options)?;
        }
        Ok(cursor.advanced(HEADER_HEIGHT))
    }

    /// One item row. Breaks to a new content page first when the cursor is
    /// past the threshold, then advances by the row height.
    pub fn render_row(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
        item: &LineItem,
    ) -> Result<LayoutCursor, LayoutError> {
        canvas.set_font(self.row_font);
        let lines = self.wrap_description(canvas.metrics(), item.description());
        let height = Self::row_height(&lines);

        let cursor = if self.policy.should_break(&cursor, height) {
            let page = canvas.add_page(PageKind::Content);
            debug!(
                "Item {} starts past y={:.1}; table continues on page {}",
                item.item_number(),
                cursor.y,
                page + 1
            );
            cursor.on_new_page(page, self.policy.restart_y())
        } else {
            cursor
        };

        let page = cursor.page_index;
        let y = cursor.y;
        let centred = CellOptions::bordered().aligned(TextAlign::Center);
        let right = CellOptions::bordered().aligned(TextAlign::Right);

        canvas.cell(
            page,
            Rect::new(self.column_x(0), y, self.columns[0], height),
            &item.item_number().to_string(),
            centred,
        )?;
        canvas.cell(
            page,
            Rect::new(self.column_x(1), y, self.columns[1], height),
            &item.quantity().to_string(),
            centred,
        )?;

        let desc_x = self.column_x(DESCRIPTION_COLUMN);
        for (i, line) in lines.iter().enumerate() {
            let line_y = y + i as f32 * ROW_LINE_HEIGHT;
            canvas.cell(
                page,
                Rect::new(desc_x, line_y, self.description_width(), ROW_LINE_HEIGHT),
                line,
                CellOptions::bordered(),
            )?;
        }

        canvas.cell(
            page,
            Rect::new(self.column_x(3), y, self.columns[3], height),
            &format_brl(item.unit_price()),
            right,
        )?;
        canvas.cell(
            page,
            Rect::new(self.column_x(4), y, self.columns[4], height),
            &format_brl(item.total()),
            right,
        )?;

        Ok(cursor.advanced(height))
    }

    pub fn render_rows<'i>(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
        items: impl IntoIterator<Item = &'i LineItem>,
    ) -> Result<LayoutCursor, LayoutError> {
        items
            .into_iter()
            .try_fold(cursor, |cursor, item| self.render_row(canvas, cursor, item))
    }

    /// The grand total row, drawn directly below the last item row with no
    /// page-break check.
    pub fn render_total(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
        total: f64,
    ) -> Result<LayoutCursor, LayoutError> {
        let bottom = cursor.y + TOTAL_ROW_HEIGHT;
        if bottom > self.bottom_limit {
            warn!(
                "Total row on page {} ends at y={:.1}, past the printable limit {:.1}",
                cursor.page_index + 1,
                bottom,
                self.bottom_limit
            );
        }

        canvas.set_fill_color(self.header_fill);
        let label_width: f32 = self.columns[..3].iter().sum();
        let page = cursor.page_index;
        let y = cursor.y;
        let filled = CellOptions::bordered().filled();

        canvas.cell(page, Rect::new(self.left, y, label_width, TOTAL_ROW_HEIGHT), "TOTAL:", filled)?;
        canvas.cell(
            page,
            Rect::new(self.column_x(3), y, self.columns[3], TOTAL_ROW_HEIGHT),
            "",
            filled.aligned(TextAlign::Center),
        )?;
        canvas.cell(
            page,
            Rect::new(self.column_x(4), y, self.columns[4], TOTAL_ROW_HEIGHT),
            &format_brl(total),
            filled.aligned(TextAlign::Right),
        )?;
        Ok(cursor.advanced(TOTAL_ROW_HEIGHT))
    }

    /// Header, every item and the total, in that order.
    pub fn render(
        &self,
        canvas: &mut Canvas,
        cursor: LayoutCursor,
        items: &[LineItem],
        total: f64,
    ) -> Result<LayoutCursor, LayoutError> {
        let cursor = self.render_header(canvas, cursor)?;
        let cursor = self.render_rows(canvas, cursor, items)?;
        self.render_total(canvas, cursor, total)
    }
}
