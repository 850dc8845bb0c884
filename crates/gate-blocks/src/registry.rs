//! Handler registry keyed by tag name.

use std::collections::HashMap;
use std::fmt;

use crate::handler::BlockHandler;

/// Maps block tag names to their handlers.
///
/// A host builds one registry up front and looks tags up while rendering.
/// The closing tag for a registered name is always `end<name>`.
///
/// # Example
///
/// ```
/// use gate_blocks::{HandlerRegistry, VersionBlock};
///
/// let mut registry = HandlerRegistry::new();
/// registry.register("if_version", VersionBlock::default());
/// assert!(registry.contains("if_version"));
/// assert_eq!(registry.tags(), vec!["if_version".to_string()]);
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Box<dyn BlockHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a tag name.
    ///
    /// If the tag was already registered, the previous handler is replaced.
    pub fn register(&mut self, tag: impl Into<String>, handler: impl BlockHandler + 'static) {
        self.handlers.insert(tag.into(), Box::new(handler));
    }

    pub fn get(&self, tag: &str) -> Option<&dyn BlockHandler> {
        self.handlers.get(tag).map(|h| h.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.handlers.contains_key(tag)
    }

    /// Registered tag names, sorted.
    pub fn tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.handlers.keys().cloned().collect();
        tags.sort();
        tags
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
