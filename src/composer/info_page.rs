//! First page: the 2x2 information grid over the letterhead.

use crate::config::QuoteConfig;
use itertools::Itertools;
use quotegen_layout::{
    Canvas, FontSpec, LayoutCursor, LayoutError, PageKind, PaintMode, Rect, TextFlow,
};
use quotegen_types::{Color, QuoteDocument};

const GRID: Rect = Rect {
    x: 10.0,
    y: 170.0,
    width: 180.0,
    height: 60.0,
};
/// Gap between a block's text and its cell's edges.
const BLOCK_INSET: f32 = 5.0;
const BLOCK_LINE_HEIGHT: f32 = 5.0;

pub(super) fn compose(
    canvas: &mut Canvas,
    config: &QuoteConfig,
    document: &QuoteDocument,
) -> Result<(), LayoutError> {
    let page = canvas.add_page(PageKind::Info);
    canvas.set_font(FontSpec::regular(10.0));
    canvas.set_text_color(Color::BLACK);

    canvas.rect(page, GRID, PaintMode::Stroke)?;
    let mid_x = GRID.x + GRID.width / 2.0;
    canvas.line(page, mid_x, GRID.y, mid_x, GRID.bottom())?;

    let half_w = GRID.width / 2.0;
    let half_h = GRID.height / 2.0;
    let blocks = [
        (GRID.x, GRID.y, config.sender_contact.clone()),
        (mid_x, GRID.y, recipient_block(document)),
        (GRID.x, GRID.y + half_h, date_block(config, document)),
        (mid_x, GRID.y + half_h, contact_block(document)),
    ];

    for (x, y, text) in blocks {
        let area = Rect::new(x, y, half_w, half_h).inset(BLOCK_INSET);
        TextFlow::new(area.x, area.width, BLOCK_LINE_HEIGHT).place(
            canvas,
            LayoutCursor::new(page, area.y),
            &text,
        )?;
    }
    Ok(())
}

fn recipient_block(document: &QuoteDocument) -> String {
    let client = &document.client;
    [
        format!("PARA: {}", client.company_name),
        format!("REF: {}", client.reference_text),
    ]
    .iter()
    .join("\n")
}

fn date_block(config: &QuoteConfig, document: &QuoteDocument) -> String {
    format!(
        "\n\nData: {}\nValidade da proposta: {} dias",
        document.issue_date.format("%d/%m/%Y"),
        config.validity_days
    )
}

fn contact_block(document: &QuoteDocument) -> String {
    let client = &document.client;
    [
        format!("A/C: {}", client.contact_name),
        format!("Contato: {}", client.phone),
        format!("Email: {}", client.email),
        format!("Local: {}", client.site_location),
    ]
    .iter()
    .join("\n")
}
