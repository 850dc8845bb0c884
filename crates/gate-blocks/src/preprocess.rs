//! Whole-document newline cleanup around block markers.
//!
//! Runs once per document, before any block is evaluated. Three global
//! substitutions are applied in order:
//!
//! 1. A newline directly before an opening marker is dropped (whitespace
//!    between the newline and the marker stays). Gated lines inside fenced
//!    code otherwise leave blank lines behind.
//! 2. `{% endif_version %}` followed by a blank line keeps a single newline.
//! 3. `{% endif_version %}` followed by a newline and a table pipe loses the
//!    newline, so the row continues directly after the marker.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::error::Result;
use crate::markers::Markers;

static DEFAULT_PREPROCESSOR: LazyLock<Preprocessor> = LazyLock::new(|| {
    Preprocessor::new(&Markers::default()).expect("Invalid default marker patterns")
});

/// Preprocess a document using the default `if_version` markers.
///
/// # Example
/// ```
/// use gate_blocks::preprocess;
///
/// let doc = "```\n{% if_version gte:2.0 %}\nnew\n{% endif_version %}\n\nold\n```";
/// assert_eq!(
///     preprocess(doc),
///     "```{% if_version gte:2.0 %}\nnew\n{% endif_version %}\nold\n```"
/// );
/// ```
pub fn preprocess(document: &str) -> String {
    DEFAULT_PREPROCESSOR.apply(document)
}

/// Newline cleanup for one marker pair.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    opening: Regex,
    closing_blank_line: String,
    closing_single_line: String,
    closing_newline_pipe: String,
    closing_pipe: String,
}

impl Preprocessor {
    /// Build the substitutions for the given markers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTag`] for a tag that is not an
    /// identifier.
    pub fn new(markers: &Markers) -> Result<Self> {
        markers.validate()?;

        let opening = Regex::new(&format!(
            r"\n(\s*\{{%-?[ \t]*{}\b)",
            regex::escape(&markers.tag)
        ))?;
        let closing = markers.closing();

        Ok(Self {
            opening,
            closing_blank_line: format!("{closing}\n\n"),
            closing_single_line: format!("{closing}\n"),
            closing_newline_pipe: format!("{closing}\n|"),
            closing_pipe: format!("{closing}|"),
        })
    }

    /// Apply all three substitutions, returning a new document.
    pub fn apply(&self, document: &str) -> String {
        let result = self.opening.replace_all(document, "${1}");
        let result = result.replace(&self.closing_blank_line, &self.closing_single_line);
        let result = result.replace(&self.closing_newline_pipe, &self.closing_pipe);

        trace!(
            before = document.len(),
            after = result.len(),
            "Preprocessed document"
        );
        result
    }
}
