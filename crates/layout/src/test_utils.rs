use crate::canvas::Canvas;
use crate::fonts::{FontSpec, TextMetrics};
use crate::page::PageGeometry;
use std::sync::Arc;

/// Every character is exactly 1 mm wide, whatever the font.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidthMetrics;

impl TextMetrics for FixedWidthMetrics {
    fn text_width(&self, _font: &FontSpec, text: &str) -> f32 {
        text.chars().count() as f32
    }
}

/// An A4 canvas measuring with [`FixedWidthMetrics`].
pub fn fixed_canvas() -> Canvas {
    Canvas::new(PageGeometry::A4, Arc::new(FixedWidthMetrics))
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
