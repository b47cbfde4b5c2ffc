use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Composition stage out of order: expected {expected}, found {found}.")]
    StageMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Page index {0} has not been started.")]
    MissingPage(usize),
}

mod afm;
pub mod canvas;
pub mod cursor;
mod elements;
pub mod encoding;
pub mod flow;
pub mod fonts;
pub mod page;
pub mod style;
pub mod table;
pub mod text;

pub use self::canvas::{CELL_PADDING, Canvas, CellOptions};
pub use self::cursor::{LayoutCursor, PageBreakPolicy};
pub use self::elements::{
    ImageElement, LayoutElement, PaintMode, PositionedElement, RectElement, TextElement,
};
pub use self::flow::TextFlow;
pub use self::fonts::{BuiltinFont, FontSpec, StandardFontMetrics, TextMetrics};
pub use self::page::{DocumentLayout, LaidOutPage, PageGeometry, PageKind};
pub use self::style::{ComputedStyle, TextAlign};
pub use self::table::TableRowRenderer;
pub use self::text::{LineWrapper, SAFETY_MARGIN, WrappedLines};

// Re-export geometry so downstream crates do not need a direct types dependency for it.
pub use quotegen_types::{Color, Rect, Size};

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod text_test;
