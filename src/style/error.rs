//! Style tree errors.

use thiserror::Error;

/// Errors raised while building, querying or printing a style tree.
///
/// Every error is reported at the call that caused it. Mutating calls apply
/// at most one field or child entry at a time, so a failure never leaves a
/// node half-updated.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A symbolic name is not part of the fixed list for the attribute.
    #[error("invalid {attribute} '{value}', expected one of: {}", .valid.join(", "))]
    Validation {
        attribute: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },

    /// An attribute was given a setting it cannot hold.
    #[error("{attribute} {reason}")]
    InvalidSetting {
        attribute: &'static str,
        reason: &'static str,
    },

    /// A non-attribute key was given something other than a nested mapping.
    #[error("got an unexpected keyword argument '{key}'")]
    UnexpectedKey { key: String },

    /// Neither an own field nor a child matched the key.
    #[error("'StyleNode' has no attribute '{key}'")]
    NotFound { key: String },

    /// Population was requested along something that is not an attribute.
    #[error("'StyleNode' has no attribute '{axis}' to populate")]
    AxisNotFound { axis: String },

    /// A colored string was requested for no input at all.
    #[error("at least one string is required")]
    EmptyInput,

    /// A style configuration document could not be loaded.
    #[error("invalid style configuration: {message}")]
    Config { message: String },

    /// Writing to the output stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for style tree operations.
pub type Result<T> = std::result::Result<T, StyleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_valid_names() {
        let err = StyleError::Validation {
            attribute: "fore",
            value: "purple".to_string(),
            valid: vec!["black", "red"],
        };
        let msg = err.to_string();
        assert!(msg.contains("fore"));
        assert!(msg.contains("'purple'"));
        assert!(msg.contains("black, red"));
    }

    #[test]
    fn test_invalid_setting_display() {
        let err = StyleError::InvalidSetting {
            attribute: "fore",
            reason: "cannot be unset",
        };
        assert_eq!(err.to_string(), "fore cannot be unset");
    }

    #[test]
    fn test_unexpected_key_display() {
        let err = StyleError::UnexpectedKey {
            key: "warn".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "got an unexpected keyword argument 'warn'"
        );
    }

    #[test]
    fn test_not_found_names_key() {
        let err = StyleError::NotFound {
            key: "missing".to_string(),
        };
        assert!(err.to_string().contains("'missing'"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: StyleError = io_err.into();
        assert!(matches!(err, StyleError::Io(_)));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err: StyleError = yaml_err.into();
        assert!(matches!(err, StyleError::Config { .. }));
    }
}
