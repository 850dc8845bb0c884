//! Per-block evaluation.
//!
//! [`render`] compares the document's current version with a block's
//! parameters and either suppresses the block or returns its content with
//! the whitespace normalized by [`normalize_whitespace`].

use gate_version::Version;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::params::ComparisonParameters;

/// Error key used when the document's own version is malformed.
const CURRENT_VERSION: &str = "current";

/// Content opening with a newline, then a table pipe.
static TABLE_ROW_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\n\s*\|").expect("Invalid table row start regex"));

/// Content closing with a table pipe, then a newline.
static TABLE_ROW_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*\n\z").expect("Invalid table row end regex"));

/// Evaluate one gated block.
///
/// Checks run in the order `eq`, `gte`, `lte` and stop at the first one that
/// fails, so a later malformed value is not reported once an earlier check
/// has already suppressed the block. A suppressed block renders as an empty
/// string.
///
/// # Errors
///
/// Returns [`Error::InvalidVersion`] when `current_version` or an evaluated
/// comparison value is not a dotted-integer version.
///
/// # Example
/// ```
/// use gate_blocks::{ComparisonParameters, render};
///
/// let params = ComparisonParameters::parse("gte:2.0").unwrap();
/// assert_eq!(render(&params, "2.0", "\nX\n").unwrap(), "\nX\n");
/// assert_eq!(render(&params, "1.9", "\nX\n").unwrap(), "");
/// ```
pub fn render(
    params: &ComparisonParameters,
    current_version: &str,
    content: &str,
) -> Result<String> {
    let current = parse_version(CURRENT_VERSION, current_version)?;

    if let Some(eq) = &params.eq {
        let version = parse_version("eq", eq)?;
        if !current.equal(&version) {
            debug!(current = %current, eq = %version, "Block suppressed by eq");
            return Ok(String::new());
        }
    }

    if let Some(gte) = &params.gte {
        let version = parse_version("gte", gte)?;
        if !current.greater_or_equal(&version) {
            debug!(current = %current, gte = %version, "Block suppressed by gte");
            return Ok(String::new());
        }
    }

    if let Some(lte) = &params.lte {
        let version = parse_version("lte", lte)?;
        if !current.less_or_equal(&version) {
            debug!(current = %current, lte = %version, "Block suppressed by lte");
            return Ok(String::new());
        }
    }

    debug!(current = %current, inline = params.inline, "Block rendered");
    Ok(normalize_whitespace(content, params.inline))
}

fn parse_version(key: &str, value: &str) -> Result<Version> {
    Version::parse(value).map_err(|source| Error::InvalidVersion {
        key: key.to_string(),
        value: value.to_string(),
        source,
    })
}

/// True when the whole content is one or more Markdown table rows: it starts
/// with a newline and a pipe, and ends with a pipe and a newline.
pub fn is_table_row(content: &str) -> bool {
    TABLE_ROW_START.is_match(content) && TABLE_ROW_END.is_match(content)
}

/// Reshape kept block content.
///
/// - Exactly one leading newline is removed. Indentation is kept.
/// - Exactly one trailing newline is removed, except for table rows, which
///   need it to end the row.
/// - Content that is neither a table row nor `inline` is wrapped in one
///   leading and one trailing newline.
pub fn normalize_whitespace(content: &str, inline: bool) -> String {
    let table_row = is_table_row(content);

    let mut body = content.strip_prefix('\n').unwrap_or(content);
    if !table_row {
        body = body.strip_suffix('\n').unwrap_or(body);
    }

    if table_row || inline {
        body.to_string()
    } else {
        format!("\n{body}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(markup: &str) -> ComparisonParameters {
        ComparisonParameters::parse(markup).unwrap()
    }

    #[test]
    fn test_unconstrained_block_renders() {
        assert_eq!(render(&params(""), "1.0", "\nX\n").unwrap(), "\nX\n");
    }

    #[test]
    fn test_all_checks_must_pass() {
        let p = params("gte:2.0 lte:3.0");
        assert_eq!(render(&p, "2.5", "\nX\n").unwrap(), "\nX\n");
        assert_eq!(render(&p, "1.5", "\nX\n").unwrap(), "");
        assert_eq!(render(&p, "3.1", "\nX\n").unwrap(), "");
    }

    #[test]
    fn test_eq_short_circuits_before_later_checks() {
        // gte is malformed but never parsed because eq already failed.
        let p = params("eq:1.0 gte:nonsense");
        assert_eq!(render(&p, "1.1", "\nX\n").unwrap(), "");
    }

    #[test]
    fn test_malformed_comparison_reported() {
        let p = params("eq:1.0 gte:nonsense");
        let err = render(&p, "1.0", "\nX\n").unwrap_err();
        match err {
            Error::InvalidVersion { key, value, .. } => {
                assert_eq!(key, "gte");
                assert_eq!(value, "nonsense");
            }
            other => panic!("Expected InvalidVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_current_version_reported() {
        let err = render(&params("eq:1.0"), "latest", "\nX\n").unwrap_err();
        assert!(matches!(err, Error::InvalidVersion { ref key, .. } if key == "current"));
        assert!(err.to_string().contains("latest"));
    }

    #[test]
    fn test_current_version_checked_even_without_comparisons() {
        assert!(render(&params(""), "", "\nX\n").is_err());
    }

    #[test]
    fn test_table_row_detection() {
        assert!(is_table_row("\n| a | b |\n"));
        assert!(is_table_row("\n  | a |\n| b |  \n"));
        assert!(!is_table_row("| a | b |\n"));
        assert!(!is_table_row("\n| a | b |"));
        assert!(!is_table_row("\ntext\n"));
    }

    #[test]
    fn test_normalize_keeps_indentation() {
        assert_eq!(
            normalize_whitespace("\n    indented\n", false),
            "\n    indented\n"
        );
        assert_eq!(normalize_whitespace("\n    indented\n", true), "    indented");
    }

    #[test]
    fn test_normalize_strips_only_one_newline() {
        assert_eq!(normalize_whitespace("\n\nX\n\n", false), "\n\nX\n\n");
        assert_eq!(normalize_whitespace("\n\nX\n\n", true), "\nX\n");
    }

    #[test]
    fn test_normalize_without_surrounding_newlines() {
        assert_eq!(normalize_whitespace("X", false), "\nX\n");
        assert_eq!(normalize_whitespace("X", true), "X");
    }

    #[test]
    fn test_normalize_table_rows_keep_trailing_newline() {
        assert_eq!(normalize_whitespace("\n| a |\n| b |\n", false), "| a |\n| b |\n");
        assert_eq!(normalize_whitespace("\n| a |\n", true), "| a |\n");
    }
}
