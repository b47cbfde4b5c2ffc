use super::QuoteGenerator;
use crate::config::QuoteConfig;
use crate::error::PipelineError;
use crate::resource::{FilesystemResourceProvider, ResourceProvider};
use quotegen_layout::{StandardFontMetrics, TextMetrics};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A builder for creating a [`QuoteGenerator`].
pub struct GeneratorBuilder {
    config: QuoteConfig,
    resources: Option<Arc<dyn ResourceProvider>>,
    asset_dir: Option<PathBuf>,
    metrics: Arc<dyn TextMetrics>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            config: QuoteConfig::default(),
            resources: None,
            asset_dir: None,
            metrics: Arc::new(StandardFontMetrics),
        }
    }
}

impl GeneratorBuilder {
    /// Stock texts, built-in Helvetica metrics, assets from the working directory.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: QuoteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_json(self, json: &str) -> Result<Self, PipelineError> {
        Ok(self.with_config(QuoteConfig::from_json_str(json)?))
    }

    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        Ok(self.with_config(QuoteConfig::from_json_file(path)?))
    }

    /// Renders pages without any background image.
    pub fn without_background(mut self) -> Self {
        self.config.background_image = None;
        self
    }

    /// Overrides the configured background image path.
    pub fn with_background(mut self, path: impl Into<String>) -> Self {
        self.config.background_image = Some(path.into());
        self
    }

    /// Resolve asset paths against `dir` on disk. Ignored when a provider is set.
    pub fn with_asset_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.asset_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Replaces the text measurement used for wrapping and alignment.
    pub fn with_metrics(mut self, metrics: Arc<dyn TextMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn build(self) -> Result<QuoteGenerator, PipelineError> {
        self.config.validate()?;
        let resources = match self.resources {
            Some(provider) => provider,
            None => {
                let dir = self.asset_dir.unwrap_or_else(|| PathBuf::from("."));
                Arc::new(FilesystemResourceProvider::new(dir))
            }
        };
        Ok(QuoteGenerator {
            config: Arc::new(self.config),
            resources,
            metrics: self.metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_validates_config() {
        let config = QuoteConfig {
            validity_days: 0,
            ..QuoteConfig::default()
        };
        assert!(matches!(
            GeneratorBuilder::new().with_config(config).build(),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn background_override_lands_in_config() {
        let generator = GeneratorBuilder::new()
            .with_config_json(r#"{ "validityDays": 15 }"#)
            .unwrap()
            .with_background("fundo.jpg")
            .build()
            .unwrap();
        assert_eq!(generator.config().validity_days, 15);
        assert_eq!(generator.config().background_image.as_deref(), Some("fundo.jpg"));
    }

    #[test]
    fn without_background_clears_the_letterhead() {
        let generator = GeneratorBuilder::new().without_background().build().unwrap();
        assert_eq!(generator.config().background_image, None);
    }
}
