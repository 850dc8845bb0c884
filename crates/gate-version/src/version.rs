//! The [`Version`] value and its ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, VersionError};

/// Trailing component accepted in place of `0` (`2.x` reads as `2.0`).
pub const WILDCARD: &str = "x";

/// A dotted-integer version such as `2.8` or `3.0.1`.
///
/// Equality, ordering and hashing ignore trailing zero components, so
/// `Version::parse("2")` equals `Version::parse("2.0.0")`.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Build a version directly from its components.
    pub fn new(components: impl Into<Vec<u64>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Parse a version string.
    ///
    /// Accepts `<int>(.<int>)*`, optionally ending in a literal `.x` which
    /// is normalized to `0`. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::Empty`] for blank input and
    /// [`VersionError::InvalidComponent`] when any component is empty,
    /// non-numeric, or a wildcard anywhere but the last position.
    pub fn parse(raw: &str) -> Result<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(VersionError::Empty);
        }

        let parts: Vec<&str> = input.split('.').collect();
        let last = parts.len() - 1;
        let mut components = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            // A bare "x" is not a version; the wildcard must follow a dot.
            if index == last && index > 0 && *part == WILDCARD {
                components.push(0);
                continue;
            }
            components.push(parse_component(input, part, index + 1)?);
        }

        Ok(Self { components })
    }

    /// The parsed components, wildcard already replaced by `0`.
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Components with trailing zeros removed.
    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        &self.components[..len]
    }

    /// Three-way comparison, padding the shorter version with zeros.
    pub fn compare(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }

    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn greater_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Less
    }

    pub fn less_or_equal(&self, other: &Self) -> bool {
        self.compare(other) != Ordering::Greater
    }
}

fn parse_component(input: &str, part: &str, position: usize) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::not_numeric(input, part, position));
    }
    part.parse::<u64>()
        .map_err(|_| VersionError::out_of_range(input, part, position))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

/// Pre-release and build metadata are dropped; only the numeric triple is kept.
impl From<&semver::Version> for Version {
    fn from(v: &semver::Version) -> Self {
        Self::new(vec![v.major, v.minor, v.patch])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_components() {
        assert_eq!(v("2.8").components(), &[2, 8]);
        assert_eq!(v("3.0.1").components(), &[3, 0, 1]);
        assert_eq!(v("7").components(), &[7]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(v("  2.8\n").components(), &[2, 8]);
    }

    #[test]
    fn test_wildcard_becomes_zero() {
        assert_eq!(v("2.x").components(), &[2, 0]);
        assert_eq!(v("2.x"), v("2.0"));
        assert_eq!(v("2.8.x"), v("2.8.0"));
    }

    #[test]
    fn test_wildcard_only_trailing() {
        assert!(Version::parse("x").is_err());
        assert!(Version::parse("2.x.1").is_err());
        assert!(Version::parse("2.X").is_err());
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(Version::parse(""), Err(VersionError::Empty));
        assert_eq!(Version::parse("   "), Err(VersionError::Empty));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        let err = Version::parse("2.eight").unwrap_err();
        assert_eq!(
            err,
            VersionError::InvalidComponent {
                input: "2.eight".to_string(),
                component: "eight".to_string(),
                position: 2,
                reason: "is not a non-negative integer",
            }
        );
    }

    #[test]
    fn test_parse_empty_component_rejected() {
        let err = Version::parse("2..1").unwrap_err();
        assert!(err.to_string().contains("component 2 ('') is empty"));
        assert!(Version::parse("2.").is_err());
        assert!(Version::parse(".2").is_err());
    }

    #[test]
    fn test_parse_signed_rejected() {
        assert!(Version::parse("-1.0").is_err());
        assert!(Version::parse("+1.0").is_err());
    }

    #[test]
    fn test_parse_overflow_rejected() {
        let err = Version::parse("1.99999999999999999999").unwrap_err();
        assert!(err.to_string().contains("does not fit in 64 bits"));
    }

    #[test]
    fn test_trailing_zeros_are_equal() {
        assert_eq!(v("2"), v("2.0"));
        assert_eq!(v("2.0"), v("2.0.0.0"));
        assert_eq!(v("0"), v("0.0"));
    }

    #[test]
    fn test_numeric_not_lexical_ordering() {
        assert!(v("2.10") > v("2.9"));
        assert!(v("10.0") > v("9.99"));
    }

    #[test]
    fn test_shorter_version_padded() {
        assert!(v("2.1") > v("2"));
        assert!(v("2") < v("2.0.1"));
        assert_eq!(v("2.0.1").compare(&v("2")), Ordering::Greater);
    }

    #[test]
    fn test_predicates() {
        let current = v("2.8");
        assert!(current.greater_or_equal(&v("2.8")));
        assert!(current.greater_or_equal(&v("2.x")));
        assert!(!current.greater_or_equal(&v("3.0")));
        assert!(current.less_or_equal(&v("2.8.0")));
        assert!(!current.less_or_equal(&v("2.7")));
        assert!(current.equal(&v("2.8.0")));
        assert!(!current.equal(&v("2.8.1")));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(v("2"));
        assert!(set.contains(&v("2.0")));
        assert!(set.contains(&v("2.x")));
        assert!(!set.contains(&v("2.1")));
    }

    #[test]
    fn test_display() {
        assert_eq!(v("2.8").to_string(), "2.8");
        assert_eq!(v("2.x").to_string(), "2.0");
        assert_eq!(v(" 3.0.1 ").to_string(), "3.0.1");
    }

    #[test]
    fn test_from_str() {
        let parsed: Version = "1.2.3".parse().unwrap();
        assert_eq!(parsed.components(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_semver_drops_prerelease() {
        let sv = semver::Version::parse("3.4.0-beta.1").unwrap();
        assert_eq!(Version::from(&sv), v("3.4"));
    }
}
