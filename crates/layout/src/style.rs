//! Drawing state captured on every positioned element.

use crate::fonts::FontSpec;
use quotegen_types::Color;

/// Horizontal placement of text inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// The graphics state an element is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub font: FontSpec,
    pub text_color: Color,
    pub fill_color: Color,
    pub draw_color: Color,
    /// Stroke width in millimetres.
    pub line_width: f32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            font: FontSpec::default(),
            text_color: Color::BLACK,
            fill_color: Color::BLACK,
            draw_color: Color::BLACK,
            line_width: 0.2,
        }
    }
}
