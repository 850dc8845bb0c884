//! Block attribute parsing.
//!
//! The markup after the tag name is a space separated list of attributes:
//!
//! ```text
//! gte:2.8 lte="3.x" inline
//! eq=1.0
//! ```
//!
//! `key=value` and the Liquid form `key:value` are both accepted. Values may
//! be double or single quoted. `inline` is a flag: writing it at all turns
//! inline mode on, whatever value follows it.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Matches one attribute: a key and an optional `=`/`:` separated value.
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][\w-]*)(?:\s*[=:]\s*("[^"]*"|'[^']*'|[^\s"']+))?"#)
        .expect("Invalid attribute regex")
});

/// The comparisons and flags attached to one gated block.
///
/// Every present comparison must hold for the block to render. An absent key
/// means no constraint of that kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonParameters {
    /// Exact version match
    pub eq: Option<String>,
    /// Lower bound, inclusive
    pub gte: Option<String>,
    /// Upper bound, inclusive
    pub lte: Option<String>,
    /// Skip the block-level newline wrapping
    pub inline: bool,
}

impl ComparisonParameters {
    /// Parse the attribute string of an opening marker.
    ///
    /// A repeated key keeps its last value.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownParameter`] for a key other than `eq`, `gte`, `lte`
    ///   or `inline`
    /// - [`Error::InvalidParameter`] for stray text or a comparison key
    ///   without a value
    ///
    /// # Example
    /// ```
    /// use gate_blocks::ComparisonParameters;
    ///
    /// let params = ComparisonParameters::parse(r#"gte:2.8 lte="3.x" inline"#).unwrap();
    /// assert_eq!(params.gte.as_deref(), Some("2.8"));
    /// assert_eq!(params.lte.as_deref(), Some("3.x"));
    /// assert!(params.inline);
    /// ```
    pub fn parse(markup: &str) -> Result<Self> {
        let mut params = Self::default();
        let mut cursor = 0;

        for caps in ATTRIBUTE_REGEX.captures_iter(markup) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            check_gap(markup, &markup[cursor..whole.start()])?;
            cursor = whole.end();

            let key = caps.get(1).map_or("", |m| m.as_str());
            let value = caps.get(2).map(|m| unquote(m.as_str()));
            params.set(markup, key, value)?;
        }
        check_gap(markup, &markup[cursor..])?;

        Ok(params)
    }

    fn set(&mut self, markup: &str, key: &str, value: Option<&str>) -> Result<()> {
        match key {
            "eq" => self.eq = Some(required(markup, key, value)?),
            "gte" => self.gte = Some(required(markup, key, value)?),
            "lte" => self.lte = Some(required(markup, key, value)?),
            // Presence alone enables the flag; any value is ignored.
            "inline" => self.inline = true,
            _ => {
                return Err(Error::UnknownParameter {
                    key: key.to_string(),
                    markup: markup.to_string(),
                });
            }
        }
        Ok(())
    }

    /// True when no comparison is present; such a block always renders.
    pub fn is_unconstrained(&self) -> bool {
        self.eq.is_none() && self.gte.is_none() && self.lte.is_none()
    }
}

fn required(markup: &str, key: &str, value: Option<&str>) -> Result<String> {
    value
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_parameter(markup, format!("{key} requires a version")))
}

fn check_gap(markup: &str, gap: &str) -> Result<()> {
    let gap = gap.trim();
    if gap.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_parameter(
            markup,
            format!("unexpected text '{gap}'"),
        ))
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
