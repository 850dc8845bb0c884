//! Block handlers dispatched by a host template engine.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::params::ComparisonParameters;
use crate::processor;

/// Default document field holding the current version.
pub const DEFAULT_VERSION_FIELD: &str = "version";

/// What a handler may read about the document being rendered.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    document: &'a str,
    fields: &'a HashMap<String, String>,
}

impl<'a> RenderContext<'a> {
    /// `document` identifies the document in logs and errors, usually its path.
    pub fn new(document: &'a str, fields: &'a HashMap<String, String>) -> Self {
        Self { document, fields }
    }

    pub fn document(&self) -> &'a str {
        self.document
    }

    pub fn field(&self, name: &str) -> Option<&'a str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// A named block tag.
///
/// The host engine hands over the opening marker's attribute string
/// (`markup`) and the block's already rendered inner text (`content`).
pub trait BlockHandler: Send + Sync {
    fn render(&self, markup: &str, content: &str, context: &RenderContext<'_>) -> Result<String>;
}

/// Handler for `if_version` blocks.
#[derive(Debug, Clone)]
pub struct VersionBlock {
    version_field: String,
}

impl VersionBlock {
    /// Compare against the document field named `version_field`.
    pub fn new(version_field: impl Into<String>) -> Self {
        Self {
            version_field: version_field.into(),
        }
    }

    pub fn version_field(&self) -> &str {
        &self.version_field
    }
}

impl Default for VersionBlock {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FIELD)
    }
}

impl BlockHandler for VersionBlock {
    fn render(&self, markup: &str, content: &str, context: &RenderContext<'_>) -> Result<String> {
        let params = ComparisonParameters::parse(markup)?;
        let current = context
            .field(&self.version_field)
            .ok_or_else(|| Error::MissingVersion {
                field: self.version_field.clone(),
            })?;

        debug!(document = context.document(), markup, current, "Evaluating version block");
        processor::render(&params, current, content)
    }
}
