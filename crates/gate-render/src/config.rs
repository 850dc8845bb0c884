//! Pipeline configuration.
//!
//! Loaded from a TOML file. Every section and field is optional:
//!
//! ```toml
//! [markers]
//! tag = "if_version"
//!
//! [page]
//! version_field = "version"
//!
//! [render]
//! preprocess = true
//! on_error = "abort"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gate_blocks::Markers;
use gate_blocks::handler::DEFAULT_VERSION_FIELD;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Config files larger than this are rejected without parsing.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// What happens when a block cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole document on the first bad block.
    #[default]
    Abort,
    /// Render the bad block as empty, log a warning and report it in
    /// [`crate::Rendered::failures`].
    Skip,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" | "fail" => Ok(FailurePolicy::Abort),
            "skip" => Ok(FailurePolicy::Skip),
            _ => Err(format!("unknown failure policy '{s}' (expected abort or skip)")),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::Abort => write!(f, "abort"),
            FailurePolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Where the current version comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Front matter field holding the page's version
    #[serde(default = "default_version_field")]
    pub version_field: String,
}

fn default_version_field() -> String {
    DEFAULT_VERSION_FIELD.to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            version_field: default_version_field(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Run the newline cleanup before evaluating blocks
    #[serde(default = "default_preprocess")]
    pub preprocess: bool,
    #[serde(default)]
    pub on_error: FailurePolicy,
}

fn default_preprocess() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preprocess: default_preprocess(),
            on_error: FailurePolicy::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    #[serde(default)]
    pub markers: Markers,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl GateConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse_at(Path::new("<string>"), content)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigNotFound`] if the file does not exist
    /// - [`Error::ConfigTooLarge`] above [`MAX_CONFIG_SIZE`]
    /// - [`Error::InvalidConfig`] for TOML or validation errors
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let size = fs::metadata(path)?.len();
        if size > MAX_CONFIG_SIZE {
            return Err(Error::ConfigTooLarge {
                path: path.to_path_buf(),
                size,
                max: MAX_CONFIG_SIZE,
            });
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse_at(path, &content)?;
        debug!(path = %path.display(), tag = %config.markers.tag, "Loaded configuration");
        Ok(config)
    }

    fn parse_at(path: &Path, content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| invalid(path, e.to_string()))?;
        config.validate_at(path)?;
        Ok(config)
    }

    /// Check values that TOML alone cannot express.
    pub fn validate(&self) -> Result<()> {
        self.validate_at(Path::new("<config>"))
    }

    fn validate_at(&self, path: &Path) -> Result<()> {
        self.markers
            .validate()
            .map_err(|e| invalid(path, e.to_string()))?;
        if self.page.version_field.trim().is_empty() {
            return Err(invalid(path, "page.version_field must not be empty"));
        }
        Ok(())
    }
}

fn invalid(path: &Path, message: impl Into<String>) -> Error {
    Error::InvalidConfig {
        path: PathBuf::from(path),
        message: message.into(),
    }
}
