//! Documents with YAML front matter.

use std::collections::HashMap;

use serde_yaml::Value;
use tracing::warn;

use crate::error::{Error, Result};

const FRONT_MATTER_FENCE: &str = "---";

/// A document and the scalar fields from its front matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    path: String,
    content: String,
    fields: HashMap<String, String>,
}

impl Page {
    /// A page without front matter. Fields can be added with [`Page::with_field`].
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Split a leading `---` fenced YAML block from the body.
    ///
    /// Strings, numbers and booleans become fields. Sequences, mappings and
    /// nulls are ignored. Sources without front matter become a page with
    /// no fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrontMatter`] when the YAML is malformed, is not a
    /// mapping, or the closing fence is missing.
    pub fn parse(path: impl Into<String>, source: &str) -> Result<Self> {
        let path = path.into();
        let Some((yaml, body)) = split_front_matter(source) else {
            return Ok(Self::new(path, source));
        };
        let yaml = yaml.ok_or_else(|| Error::FrontMatter {
            document: path.clone(),
            message: "missing closing '---'".to_string(),
        })?;

        let fields = parse_fields(&path, yaml)?;
        Ok(Self {
            path,
            content: body.to_string(),
            fields,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The body, front matter removed
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Returns `None` when the source has no opening fence, and `Some((None, _))`
/// when the opening fence is never closed.
fn split_front_matter(source: &str) -> Option<(Option<&str>, &str)> {
    let first_line_end = source.find('\n')?;
    if source[..first_line_end].trim_end() != FRONT_MATTER_FENCE {
        return None;
    }

    let rest = &source[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return Some((Some(&rest[..offset]), &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    Some((None, source))
}

fn parse_fields(document: &str, yaml: &str) -> Result<HashMap<String, String>> {
    let invalid = |message: String| Error::FrontMatter {
        document: document.to_string(),
        message,
    };

    if yaml.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let mapping = match serde_yaml::from_str::<Value>(yaml).map_err(|e| invalid(e.to_string()))? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(HashMap::new()),
        _ => return Err(invalid("front matter must be a mapping".to_string())),
    };

    let mut fields = HashMap::new();
    for (key, value) in mapping {
        let Value::String(key) = key else {
            continue;
        };
        let value = match value {
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                if n.is_f64() {
                    warn!(
                        document,
                        field = %key,
                        value = %n,
                        "Front matter number may have lost trailing zeros; quote version values"
                    );
                }
                n.to_string()
            }
            _ => continue,
        };
        fields.insert(key, value);
    }
    Ok(fields)
}
