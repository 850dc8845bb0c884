//! Reference host pipeline for version-gated documents.
//!
//! Wires the pieces from `gate-blocks` into a minimal template host:
//!
//! 1. [`Page`] splits YAML front matter from the body and exposes its fields.
//! 2. [`Pipeline::render_page`] preprocesses the body, parses the block tags
//!    into a [`Template`] and renders it with the registered handlers.
//! 3. [`GateConfig`] selects the tag name, the version field and what to do
//!    when a block fails ([`FailurePolicy`]).
//!
//! Only registered block tags are interpreted. Every other `{% ... %}` tag is
//! left in the output for the next stage of the host's pipeline.
//!
//! # Example
//!
//! ```
//! use gate_render::{Page, Pipeline};
//!
//! let page = Page::parse(
//!     "install.md",
//!     "---\nversion: \"2.8\"\n---\nRun\n{% if_version gte:3.0 %}\nnew\n{% endif_version %}\nold\n",
//! )
//! .unwrap();
//! let rendered = Pipeline::with_defaults().unwrap().render_page(&page).unwrap();
//! assert_eq!(rendered.content, "Run\nold\n");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod pipeline;
pub mod template;

pub use config::{FailurePolicy, GateConfig, PageConfig, RenderConfig};
pub use error::{Error, Result};
pub use page::Page;
pub use pipeline::{BlockFailure, Pipeline, Rendered};
pub use template::{Block, Node, Template};
