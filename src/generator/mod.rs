mod builder;

pub use builder::GeneratorBuilder;

use crate::composer::DocumentComposer;
use crate::config::QuoteConfig;
use crate::error::PipelineError;
use crate::resource::ResourceProvider;
use log::info;
use quotegen_layout::{DocumentLayout, TextMetrics};
use quotegen_render_lopdf::LopdfRenderer;
use quotegen_types::QuoteDocument;
use std::path::Path;
use std::sync::Arc;

/// Produces finished proposal PDFs. Built by [`GeneratorBuilder`].
pub struct QuoteGenerator {
    config: Arc<QuoteConfig>,
    resources: Arc<dyn ResourceProvider>,
    metrics: Arc<dyn TextMetrics>,
}

impl QuoteGenerator {
    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    /// Runs the composer only, without rendering.
    pub fn layout(&self, document: &QuoteDocument) -> Result<DocumentLayout, PipelineError> {
        Ok(DocumentComposer::compose(
            &self.config,
            Arc::clone(&self.metrics),
            document,
        )?)
    }

    /// Lays out and renders `document`, returning the complete PDF file.
    pub fn generate(&self, document: &QuoteDocument) -> Result<Vec<u8>, PipelineError> {
        let layout = self.layout(document)?;

        let mut renderer = LopdfRenderer::new()
            .with_title(self.config.title.clone())
            .with_compression(self.config.compress)
            .with_creation_date(chrono::Local::now().naive_local());
        for src in layout.image_sources() {
            info!("Loading background '{}' via {}", src, self.resources.name());
            let bytes = self.resources.load(src)?;
            renderer.add_image(src, bytes.to_vec());
        }

        let pdf = renderer.render(&layout)?;
        info!(
            "Generated proposal with {} item(s) on {} page(s), {} bytes",
            document.items().len(),
            layout.page_count(),
            pdf.len()
        );
        Ok(pdf)
    }

    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        document: &QuoteDocument,
        path: P,
    ) -> Result<(), PipelineError> {
        let pdf = self.generate(document)?;
        std::fs::write(path, pdf)?;
        Ok(())
    }
}

/// `Proposta_SEDA_{YYYYMMDD}.pdf` for the document's issue date.
pub fn default_file_name(document: &QuoteDocument) -> String {
    format!("Proposta_SEDA_{}.pdf", document.issue_date.format("%Y%m%d"))
}
