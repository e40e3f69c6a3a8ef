//! Configuration errors.

/// Errors raised while loading or validating settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Configuration sources could not be read or merged.
    #[error("failed to load {section} settings: {message}")]
    Load {
        section: &'static str,
        message: String,
    },
    /// A field holds a value that cannot be used.
    #[error("invalid {field} '{value}': {reason}")]
    Invalid {
        field: &'static str,
        value: String,
        reason: String,
    },
    /// A required text field is blank.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

impl SettingsError {
    /// Create a load error for the named settings section.
    pub fn load(section: &'static str, message: impl Into<String>) -> Self {
        Self::Load {
            section,
            message: message.into(),
        }
    }

    /// Create an invalid-value error.
    pub fn invalid(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an empty-field error.
    pub const fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }
}
