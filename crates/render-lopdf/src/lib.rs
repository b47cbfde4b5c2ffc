//! PDF renderer for laid-out quote pages, built on lopdf.
//!
//! The renderer takes a finished [`quotegen_layout::DocumentLayout`] (millimetres,
//! top-left origin) and writes a complete PDF into memory: built-in Type1
//! fonts, one shared resource dictionary, an image XObject per distinct image
//! source, and one content stream per page.

mod error;
mod images;
mod page;
mod renderer;

pub use error::RenderError;
pub use renderer::{LopdfRenderer, PT_PER_MM};
