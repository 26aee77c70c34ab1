//! Error types for configuration loading and scene construction.
//!
//! Hole classification itself never fails: a candidate that does not qualify is
//! simply left out of the snapshot.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type HoleResult<T> = Result<T, HoleError>;

/// Errors that can occur outside of the classification pass.
#[derive(Debug, Error)]
pub enum HoleError {
    /// A configuration value is outside its permitted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A text scene could not be turned into a world.
    #[error("invalid scene: {0}")]
    Scene(String),
}

impl HoleError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }

    /// Create a scene error.
    #[must_use]
    pub fn scene(details: impl Into<String>) -> Self {
        Self::Scene(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HoleError::invalid_config("radius must be at least 1");
        assert!(format!("{err}").contains("radius must be at least 1"));

        let err = HoleError::scene("unknown block 'x'");
        assert!(format!("{err}").contains("unknown block"));

        let parse_failure = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = HoleError::from(parse_failure);
        assert!(format!("{err}").starts_with("failed to parse configuration"));
    }
}
