use crate::resource::ResourceError;
use quotegen_layout::LayoutError;
use quotegen_render_lopdf::RenderError;
use quotegen_types::QuoteError;
use thiserror::Error;

/// Everything that can stop a proposal from being produced. No partial output
/// is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid quote data: {0}")]
    Quote(#[from] QuoteError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Asset unavailable: {0}")]
    Resource(#[from] ResourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
