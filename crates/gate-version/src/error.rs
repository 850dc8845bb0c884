//! Error types for gate-version

pub type Result<T> = std::result::Result<T, VersionError>;

/// A version string that is not a dotted integer sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("empty version string")]
    Empty,

    /// `position` is 1-based, counting dot-separated components.
    #[error("invalid version '{input}': component {position} ('{component}') {reason}")]
    InvalidComponent {
        input: String,
        component: String,
        position: usize,
        reason: &'static str,
    },
}

impl VersionError {
    fn component(input: &str, component: &str, position: usize, reason: &'static str) -> Self {
        Self::InvalidComponent {
            input: input.to_string(),
            component: component.to_string(),
            position,
            reason,
        }
    }

    pub(crate) fn not_numeric(input: &str, component: &str, position: usize) -> Self {
        let reason = if component.is_empty() {
            "is empty"
        } else {
            "is not a non-negative integer"
        };
        Self::component(input, component, position, reason)
    }

    pub(crate) fn out_of_range(input: &str, component: &str, position: usize) -> Self {
        Self::component(input, component, position, "does not fit in 64 bits")
    }
}
