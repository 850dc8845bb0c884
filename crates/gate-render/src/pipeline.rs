//! Page rendering pipeline.

use std::collections::HashMap;

use gate_blocks::{HandlerRegistry, Preprocessor, RenderContext, VersionBlock};
use tracing::{debug, info};

use crate::config::GateConfig;
use crate::error::Result;
use crate::page::Page;
use crate::template::Template;

/// A block that failed under [`crate::FailurePolicy::Skip`] and rendered empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFailure {
    pub document: String,
    /// 1-based line of the opening tag, counted in the preprocessed body
    pub line: usize,
    pub markup: String,
    pub message: String,
}

/// Output of one page render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub content: String,
    pub failures: Vec<BlockFailure>,
}

impl Rendered {
    /// True when no block was skipped.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Preprocess, parse and render documents.
///
/// A pipeline is immutable once built and can be shared across threads to
/// render different pages concurrently.
#[derive(Debug)]
pub struct Pipeline {
    config: GateConfig,
    registry: HandlerRegistry,
    preprocessor: Preprocessor,
}

impl Pipeline {
    /// Build a pipeline with [`VersionBlock`] registered under the configured tag.
    pub fn new(config: GateConfig) -> Result<Self> {
        config.validate()?;
        let preprocessor = Preprocessor::new(&config.markers)?;

        let mut registry = HandlerRegistry::new();
        registry.register(
            config.markers.tag.clone(),
            VersionBlock::new(config.page.version_field.clone()),
        );

        debug!(
            tag = %config.markers.tag,
            version_field = %config.page.version_field,
            on_error = %config.render.on_error,
            "Pipeline ready"
        );
        Ok(Self {
            config,
            registry,
            preprocessor,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(GateConfig::default())
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Register additional block handlers before rendering.
    ///
    /// Additional handlers are dispatched by the template but are not part of
    /// the newline preprocessing, which only knows the configured markers.
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Render a page body using its front matter fields.
    pub fn render_page(&self, page: &Page) -> Result<Rendered> {
        self.render_str(page.path(), page.content(), page.fields())
    }

    /// Render a document body for hosts that keep their own page model.
    ///
    /// `document` identifies the body in errors and logs.
    pub fn render_str(
        &self,
        document: &str,
        content: &str,
        fields: &HashMap<String, String>,
    ) -> Result<Rendered> {
        let body = if self.config.render.preprocess {
            self.preprocessor.apply(content)
        } else {
            content.to_string()
        };

        let template = Template::parse(document, &body, &self.registry)?;
        let context = RenderContext::new(document, fields);
        let rendered = template.render(&self.registry, &context, self.config.render.on_error)?;

        if !rendered.is_clean() {
            info!(
                document,
                skipped = rendered.failures.len(),
                "Rendered with skipped blocks"
            );
        }
        Ok(rendered)
    }
}
