//! Error handling types for build configuration queries
//!
//! Every failure a query can hit has its own variant so callers can match on
//! the kind instead of the message text.

use std::path::PathBuf;
use thiserror::Error;

use crate::alias::Domain;

/// Comprehensive error type for configuration queries
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Spelling not registered in any alias set of the domain
    #[error("Unsupported {domain}: {identifier}")]
    UnsupportedIdentifier { domain: Domain, identifier: String },

    /// Canonical compiler id with no entry in the configuration document
    #[error("Unknown compiler: {compiler}")]
    UnknownCompiler { compiler: String },

    /// Compiler entry lacks a field or has the wrong shape
    #[error("Malformed entry for compiler `{compiler}`: {detail}")]
    MalformedEntry { compiler: String, detail: String },

    /// A language is needed by the action but none was given
    #[error("`--lang` is required for the action `{action}`")]
    MissingRequiredArgument { action: String },

    /// Reading the source file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source text is not valid JSON
    #[error("Invalid json format in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Top-level field missing from a standalone JSON file
    #[error("Missing field `{field}` in {}", path.display())]
    MissingField { path: PathBuf, field: String },

    /// Top-level field present but of an unusable JSON type
    #[error("Invalid field `{field}` in {}: expected {expected}, found {found}", path.display())]
    InvalidField {
        path: PathBuf,
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for configuration queries
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Helper functions for common error patterns
impl ConfigError {
    /// Create an unsupported identifier error, keeping the raw input
    pub fn unsupported(domain: Domain, identifier: impl Into<String>) -> Self {
        ConfigError::UnsupportedIdentifier {
            domain,
            identifier: identifier.into(),
        }
    }

    /// Create an unknown compiler error
    pub fn unknown_compiler(compiler: impl Into<String>) -> Self {
        ConfigError::UnknownCompiler {
            compiler: compiler.into(),
        }
    }

    /// Create a malformed entry error
    pub fn malformed(compiler: impl Into<String>, detail: impl Into<String>) -> Self {
        ConfigError::MalformedEntry {
            compiler: compiler.into(),
            detail: detail.into(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(action: impl Into<String>) -> Self {
        ConfigError::MissingRequiredArgument {
            action: action.into(),
        }
    }

    /// Create a parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ConfigError::InvalidField {
            path: path.into(),
            field: field.into(),
            expected,
            found,
        }
    }

    /// Create a missing field error
    pub fn missing_field(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        ConfigError::MissingField {
            path: path.into(),
            field: field.into(),
        }
    }
}
