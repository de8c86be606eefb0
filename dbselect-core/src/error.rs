//! Error types for selector construction and configuration loading.
//!
//! Every failure in this crate happens while a selector is being configured.
//! Once a [`TableSelector`](crate::TableSelector) has been built, evaluating
//! it cannot fail.

use thiserror::Error;

/// Main error type for dbselect operations.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// A configured pattern does not compile as a regular expression
    #[error("Configuration error: invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A table identifier could not be parsed
    #[error("Invalid table identifier '{input}': expected 'database.table' or 'database.schema.table'")]
    InvalidTableId { input: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with `SelectorError`
pub type Result<T> = std::result::Result<T, SelectorError>;

impl SelectorError {
    /// Creates an invalid pattern error for the given token
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an invalid table identifier error
    pub fn invalid_table_id(input: impl Into<String>) -> Self {
        Self::InvalidTableId {
            input: input.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Returns true for defects in the selector configuration itself.
    ///
    /// Connector startup should abort on these rather than retry.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. } | Self::Configuration { .. }
        )
    }
}
