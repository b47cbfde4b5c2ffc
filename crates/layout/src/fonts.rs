//! Font selection and text measurement.
//!
//! Only the PDF base-14 Helvetica faces are supported. They are never embedded,
//! so their metrics are compiled in (see `afm.rs`).

use crate::afm;
use crate::encoding::encoded_byte;

/// Millimetres per PDF point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// The built-in faces a document can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinFont {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl BuiltinFont {
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold];

    /// The `BaseFont` name written into the font dictionary.
    pub fn postscript_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The name the font is registered under in the page resources.
    pub fn resource_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "F1",
            BuiltinFont::HelveticaBold => "F2",
        }
    }

    fn widths(self) -> &'static [u16; 224] {
        match self {
            BuiltinFont::Helvetica => &afm::HELVETICA,
            BuiltinFont::HelveticaBold => &afm::HELVETICA_BOLD,
        }
    }

    /// Advance width of one character in thousandths of an em.
    pub fn glyph_width(self, c: char) -> u16 {
        match encoded_byte(c) {
            b if b < 0x20 => afm::CONTROL_WIDTH,
            b => self.widths()[(b - 0x20) as usize],
        }
    }
}

/// A face at a size (in points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub font: BuiltinFont,
    pub size: f32,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self {
        Self {
            font: BuiltinFont::Helvetica,
            size,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            font: BuiltinFont::HelveticaBold,
            size,
        }
    }

    /// Font size converted to layout units.
    pub fn size_mm(&self) -> f32 {
        self.size * MM_PER_PT
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec::regular(10.0)
    }
}

/// Measures rendered text width, in millimetres, under a given font.
pub trait TextMetrics: Send + Sync {
    fn text_width(&self, font: &FontSpec, text: &str) -> f32;

    fn char_width(&self, font: &FontSpec, c: char) -> f32 {
        let mut buf = [0u8; 4];
        self.text_width(font, c.encode_utf8(&mut buf))
    }
}

/// Metrics of the built-in Helvetica faces. Single-byte (WinAnsi) text only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl TextMetrics for StandardFontMetrics {
    fn text_width(&self, font: &FontSpec, text: &str) -> f32 {
        let units: u32 = text.chars().map(|c| font.font.glyph_width(c) as u32).sum();
        units as f32 * font.size / 1000.0 * MM_PER_PT
    }

    fn char_width(&self, font: &FontSpec, c: char) -> f32 {
        font.font.glyph_width(c) as f32 * font.size / 1000.0 * MM_PER_PT
    }
}
