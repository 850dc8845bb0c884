//! Version-gated blocks for text templates.
//!
//! A gated block looks like this:
//!
//! ```text
//! {% if_version gte:2.8 lte:3.x %}
//! content shown for 2.8 up to 3.0
//! {% endif_version %}
//! ```
//!
//! The crate has three parts:
//!
//! - [`preprocess`] runs once over a whole document and collapses the newlines
//!   around markers so code samples and table rows survive block removal.
//! - [`render`] decides whether one block is kept, given its
//!   [`ComparisonParameters`] and the document's current version, and
//!   normalizes the whitespace of kept content.
//! - [`BlockHandler`] and [`HandlerRegistry`] let a host template engine
//!   dispatch tags by name; [`VersionBlock`] is the handler for `if_version`.

pub mod error;
pub mod handler;
pub mod markers;
pub mod params;
pub mod preprocess;
pub mod processor;
pub mod registry;

pub use error::{Error, Result};
pub use handler::{BlockHandler, RenderContext, VersionBlock};
pub use markers::Markers;
pub use params::ComparisonParameters;
pub use preprocess::{Preprocessor, preprocess};
pub use processor::{is_table_row, normalize_whitespace, render};
pub use registry::HandlerRegistry;
