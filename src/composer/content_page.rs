//! Proposal text, exclusions and the item table. Flowing text and headings
//! continue on a fresh content page when they reach the bottom margin; table
//! rows follow the table's own threshold rule.

use crate::config::QuoteConfig;
use log::debug;
use quotegen_layout::{
    Canvas, CellOptions, FontSpec, LayoutCursor, LayoutError, PageBreakPolicy, PageKind, Rect,
    TableRowRenderer, TextAlign, TextFlow,
};
use quotegen_layout::table::HEADER_HEIGHT;
use quotegen_types::QuoteDocument;

const TITLE_HEIGHT: f32 = 10.0;
const HEADING_HEIGHT: f32 = 10.0;
const TEXT_LINE_HEIGHT: f32 = 6.0;
const MARKER_WIDTH: f32 = 3.0;
const MARKER: &str = "> ";

pub(super) fn compose(
    canvas: &mut Canvas,
    config: &QuoteConfig,
    document: &QuoteDocument,
) -> Result<(), LayoutError> {
    let geometry = *canvas.geometry();
    let left = geometry.margin_left;
    let width = geometry.content_width();
    let auto_break = PageBreakPolicy::BottomLimit {
        limit: geometry.break_limit(),
        restart_y: geometry.margin_top,
    };

    let page = canvas.add_page(PageKind::Content);
    let mut cursor = LayoutCursor::new(page, geometry.margin_top);

    canvas.set_font(FontSpec::bold(12.0));
    let title = format!(
        "{}: {}",
        config.proposal_title,
        config.proposal_number(document)
    );
    canvas.cell(
        cursor.page_index,
        Rect::new(left, cursor.y, width, TITLE_HEIGHT),
        &title,
        CellOptions::plain(),
    )?;
    cursor = cursor.advanced(TITLE_HEIGHT + 2.0);

    let paragraph = TextFlow::new(left, width, TEXT_LINE_HEIGHT).with_page_break(auto_break);

    canvas.set_font(FontSpec::regular(10.0));
    cursor = paragraph.place(canvas, cursor, &config.intro_text)?;
    cursor = cursor.advanced(5.0);

    cursor = heading(canvas, cursor, left, width, &config.object_heading, &auto_break)?;
    canvas.set_font(FontSpec::regular(10.0));
    cursor = paragraph
        .aligned(TextAlign::Justify)
        .place(canvas, cursor, &document.proposal_object)?;
    cursor = cursor.advanced(1.0);

    cursor = heading(canvas, cursor, left, width, &config.exclusions_heading, &auto_break)?;
    canvas.set_font(FontSpec::regular(10.0));
    let bullet_text = TextFlow::new(left + MARKER_WIDTH, width - MARKER_WIDTH, TEXT_LINE_HEIGHT)
        .with_page_break(auto_break);
    for exclusion in &config.exclusions {
        cursor = canvas.ensure_room(cursor, TEXT_LINE_HEIGHT, &auto_break)?;
        canvas.cell(
            cursor.page_index,
            Rect::new(left, cursor.y, MARKER_WIDTH, TEXT_LINE_HEIGHT),
            MARKER,
            CellOptions::plain(),
        )?;
        cursor = bullet_text.place(canvas, cursor, exclusion)?;
    }
    cursor = cursor.advanced(5.0);

    let table = TableRowRenderer::new()
        .with_header_fill(config.table_fill)
        .with_bottom_limit(geometry.break_limit());
    cursor = canvas.ensure_room(cursor, HEADER_HEIGHT, &auto_break)?;
    debug!(
        "Item table starts at y={:.1} on page {}",
        cursor.y,
        cursor.page_index + 1
    );
    table.render(canvas, cursor, document.items(), document.total())?;
    Ok(())
}

/// A bold single-line heading that moves to the next page rather than cross
/// the bottom margin.
fn heading(
    canvas: &mut Canvas,
    cursor: LayoutCursor,
    left: f32,
    width: f32,
    text: &str,
    policy: &PageBreakPolicy,
) -> Result<LayoutCursor, LayoutError> {
    let cursor = canvas.ensure_room(cursor, HEADING_HEIGHT, policy)?;
    canvas.set_font(FontSpec::bold(11.0));
    canvas.cell(
        cursor.page_index,
        Rect::new(left, cursor.y, width, HEADING_HEIGHT),
        text,
        CellOptions::plain(),
    )?;
    Ok(cursor.advanced(HEADING_HEIGHT))
}
