//! Sequences the proposal pages: information grid, content (with as many
//! continuation pages as the item table needs), closing.
//!
//! Composition is strictly linear. Each stage method checks that it is called
//! in order and advances the stage; calling one out of order is a
//! [`LayoutError::StageMismatch`].

mod closing_page;
mod content_page;
mod info_page;

use crate::config::QuoteConfig;
use log::{debug, info};
use quotegen_layout::{Canvas, DocumentLayout, LayoutError, PageGeometry, TextMetrics};
use quotegen_types::QuoteDocument;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerStage {
    Info,
    Content,
    Closing,
    Finalized,
}

impl ComposerStage {
    fn name(self) -> &'static str {
        match self {
            ComposerStage::Info => "info page",
            ComposerStage::Content => "content page",
            ComposerStage::Closing => "closing page",
            ComposerStage::Finalized => "finalized document",
        }
    }
}

pub struct DocumentComposer<'a> {
    config: &'a QuoteConfig,
    canvas: Canvas,
    stage: ComposerStage,
}

impl<'a> DocumentComposer<'a> {
    pub fn new(config: &'a QuoteConfig, metrics: Arc<dyn TextMetrics>) -> Self {
        let mut canvas = Canvas::new(PageGeometry::A4, metrics);
        if let Some(background) = &config.background_image {
            canvas = canvas.with_background(background.clone());
        }
        canvas.set_draw_color(config.draw_color);
        Self {
            config,
            canvas,
            stage: ComposerStage::Info,
        }
    }

    /// Lays out the whole document in one go.
    pub fn compose(
        config: &'a QuoteConfig,
        metrics: Arc<dyn TextMetrics>,
        document: &QuoteDocument,
    ) -> Result<DocumentLayout, LayoutError> {
        let mut composer = Self::new(config, metrics);
        composer.compose_info(document)?;
        composer.compose_content(document)?;
        composer.compose_closing()?;
        composer.finish()
    }

    pub fn stage(&self) -> ComposerStage {
        self.stage
    }

    fn enter(&mut self, expected: ComposerStage, next: ComposerStage) -> Result<(), LayoutError> {
        if self.stage != expected {
            return Err(LayoutError::StageMismatch {
                expected: expected.name(),
                found: self.stage.name(),
            });
        }
        debug!("Composing {}", expected.name());
        self.stage = next;
        Ok(())
    }

    pub fn compose_info(&mut self, document: &QuoteDocument) -> Result<(), LayoutError> {
        self.enter(ComposerStage::Info, ComposerStage::Content)?;
        info_page::compose(&mut self.canvas, self.config, document)
    }

    pub fn compose_content(&mut self, document: &QuoteDocument) -> Result<(), LayoutError> {
        self.enter(ComposerStage::Content, ComposerStage::Closing)?;
        content_page::compose(&mut self.canvas, self.config, document)
    }

    pub fn compose_closing(&mut self) -> Result<(), LayoutError> {
        self.enter(ComposerStage::Closing, ComposerStage::Finalized)?;
        closing_page::compose(&mut self.canvas, self.config)
    }

    pub fn finish(self) -> Result<DocumentLayout, LayoutError> {
        if self.stage != ComposerStage::Finalized {
            return Err(LayoutError::StageMismatch {
                expected: ComposerStage::Finalized.name(),
                found: self.stage.name(),
            });
        }
        let layout = self.canvas.finish();
        info!("Composed {} page(s)", layout.page_count());
        Ok(layout)
    }
}
