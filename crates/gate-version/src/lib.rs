//! Dotted-integer versions for version-gated documents.
//!
//! A [`Version`] is an ordered tuple of non-negative integers parsed from a
//! string such as `2.8` or `3.0.1`. A trailing `.x` wildcard is read as `0`,
//! so `2.x` and `2.0` compare equal. Missing trailing components count as
//! zero: `2`, `2.0` and `2.0.0` are all the same version.
//!
//! There are no pre-release or build-metadata semantics. Anything that is not
//! a dotted integer sequence is rejected with a [`VersionError`].
//!
//! # Examples
//!
//! ```
//! use gate_version::Version;
//!
//! let current = Version::parse("2.8").unwrap();
//! assert!(current.greater_or_equal(&Version::parse("2.x").unwrap()));
//! assert!(current.less_or_equal(&Version::parse("3.0").unwrap()));
//! assert!(Version::parse("2.x").unwrap().equal(&Version::parse("2.0").unwrap()));
//! ```

pub mod error;
pub mod version;

pub use error::{Result, VersionError};
pub use version::{Version, WILDCARD};

use std::cmp::Ordering;

/// Parses a dotted-integer version string.
///
/// Shorthand for [`Version::parse`].
pub fn parse(raw: &str) -> Result<Version> {
    Version::parse(raw)
}

/// Orders two versions component-wise, padding the shorter one with zeros.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.compare(b)
}
