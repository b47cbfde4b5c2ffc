//! Commercial proposal PDFs from structured quote data.
//!
//! A [`QuoteDocument`] (client, proposal text, line items) goes through the
//! [`DocumentComposer`], which lays out the information page, the content page
//! with its item table (continuing over as many pages as needed) and the closing
//! page, and the lopdf renderer turns that layout into PDF bytes.
//!
//! ```ignore
//! let generator = GeneratorBuilder::new().with_background("fundo.jpg").build()?;
//! let pdf: Vec<u8> = generator.generate(&document)?;
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod generator;
pub mod resource;

pub use composer::{ComposerStage, DocumentComposer};
pub use config::{DEFAULT_BACKGROUND, QuoteConfig};
pub use error::PipelineError;
pub use generator::{GeneratorBuilder, QuoteGenerator, default_file_name};
pub use resource::{
    FilesystemResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
};

pub use quotegen_layout::{DocumentLayout, LayoutError, PageKind};
pub use quotegen_render_lopdf::RenderError;
pub use quotegen_types::{ClientInfo, Color, LineItem, QuoteDocument, QuoteError, format_brl};

/// Renders `document` with the stock configuration. The letterhead
/// (`fundo.jpg`) is read from the current directory.
pub fn generate(document: &QuoteDocument) -> Result<Vec<u8>, PipelineError> {
    GeneratorBuilder::new().build()?.generate(document)
}
