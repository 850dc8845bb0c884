//! Block marker names.
//!
//! Markers follow the Liquid convention: the opening tag is `{% <tag> ... %}`
//! and the closing tag is `{% end<tag> %}`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default opening tag name.
pub const DEFAULT_TAG: &str = "if_version";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Opening tag name, e.g. `if_version`
    #[serde(default = "default_tag")]
    pub tag: String,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

impl Default for Markers {
    fn default() -> Self {
        Self { tag: default_tag() }
    }
}

impl Markers {
    /// Create markers for a custom tag name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTag`] unless the name is an identifier
    /// (ASCII letter or `_`, then letters, digits or `_`).
    pub fn new(tag: impl Into<String>) -> Result<Self> {
        let markers = Self { tag: tag.into() };
        markers.validate()?;
        Ok(markers)
    }

    pub fn validate(&self) -> Result<()> {
        let mut chars = self.tag.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            Ok(())
        } else {
            Err(Error::InvalidTag(self.tag.clone()))
        }
    }

    /// Closing tag name, e.g. `endif_version`
    pub fn end_tag(&self) -> String {
        format!("end{}", self.tag)
    }

    /// The canonical closing marker, e.g. `{% endif_version %}`
    pub fn closing(&self) -> String {
        format!("{{% {} %}}", self.end_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_markers() {
        let markers = Markers::default();
        assert_eq!(markers.tag, "if_version");
        assert_eq!(markers.end_tag(), "endif_version");
        assert_eq!(markers.closing(), "{% endif_version %}");
    }

    #[test]
    fn test_custom_tag() {
        let markers = Markers::new("if_release").unwrap();
        assert_eq!(markers.closing(), "{% endif_release %}");
    }

    #[test]
    fn test_invalid_tags_rejected() {
        for tag in ["", "1version", "if-version", "if version", "{%"] {
            assert!(
                matches!(Markers::new(tag), Err(Error::InvalidTag(_))),
                "expected '{tag}' to be rejected"
            );
        }
    }
}
