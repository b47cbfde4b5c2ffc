use crate::style::ComputedStyle;
use quotegen_types::Rect;
use std::sync::Arc;

/// A single drawable item with its absolute position (millimetres, top-left
/// origin) and the graphics state it is drawn with. A page is simply a list of
/// these.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
    pub style: Arc<ComputedStyle>,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement, style: Arc<ComputedStyle>) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
            style,
        }
    }

    /// Text baseline for a text element: vertically centred in its box.
    pub fn baseline(&self) -> f32 {
        self.y + 0.5 * self.height + 0.3 * self.style.font.size_mm()
    }

    pub fn text(&self) -> Option<&str> {
        match &self.element {
            LayoutElement::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    /// A straight line from `(x, y)` to `(x + width, y + height)`.
    Line,
    Image(ImageElement),
}

/// One line of text. `x` is where the first glyph starts.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    /// Extra space added to every ASCII space, in millimetres (justified text).
    pub word_spacing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    Stroke,
    Fill,
    FillStroke,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub paint: PaintMode,
}

/// An image resource stretched over the element box.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub src: String,
}
