//! Last page: payment terms, closing text and the signature block.

use crate::config::QuoteConfig;
use quotegen_layout::{
    Canvas, CellOptions, FontSpec, LayoutCursor, LayoutError, PageKind, Rect, TextFlow,
};

const TERMS_TOP: f32 = 60.0;
const SIGNATURE_Y: f32 = 200.0;
const SIGNATURE_LENGTH: f32 = 60.0;

pub(super) fn compose(canvas: &mut Canvas, config: &QuoteConfig) -> Result<(), LayoutError> {
    let geometry = *canvas.geometry();
    let left = geometry.margin_left;
    let width = geometry.content_width();

    let page = canvas.add_page(PageKind::Closing);

    canvas.set_font(FontSpec::bold(10.0));
    canvas.cell(
        page,
        Rect::new(left, TERMS_TOP, width, 10.0),
        &format!("CONDIÇÕES DE PAGAMENTO: {}", config.payment_terms),
        CellOptions::plain(),
    )?;

    canvas.set_font(FontSpec::regular(10.0));
    TextFlow::new(left, width, 6.0).place(
        canvas,
        LayoutCursor::new(page, TERMS_TOP + 10.0),
        &config.closing_text,
    )?;

    canvas.line(page, left, SIGNATURE_Y, left + SIGNATURE_LENGTH, SIGNATURE_Y)?;

    let name_y = SIGNATURE_Y + 5.0;
    canvas.set_font(FontSpec::bold(12.0));
    canvas.cell(
        page,
        Rect::new(left, name_y, width, 6.0),
        &config.signatory_name,
        CellOptions::plain(),
    )?;

    canvas.set_font(FontSpec::regular(10.0));
    canvas.cell(
        page,
        Rect::new(left, name_y + 6.0, width, 5.0),
        &config.signatory_id,
        CellOptions::plain(),
    )?;
    Ok(())
}
