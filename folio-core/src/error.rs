//! Structured error types for folio-core.
//!
//! Pointer handling and form validation never fail; these cover the ambient
//! edges: reading content and config files, parsing timezones and locales.
//! The `folio` binary wraps them with `anyhow` context.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio-core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// TOML content or config could not be parsed
    #[error("TOML error in {context}: {source}")]
    Toml {
        context: String,
        source: toml::de::Error,
    },

    /// Content parsed but is not usable
    #[error("Invalid content: {reason}")]
    InvalidContent { reason: String },

    /// Two projects share a slug
    #[error("Duplicate project slug '{slug}'")]
    DuplicateSlug { slug: String },

    /// Timezone name is not a known IANA zone
    #[error("Unknown timezone '{name}'")]
    UnknownTimezone { name: String },

    /// Locale code has no message table
    #[error("Unknown locale '{code}' (expected one of: en, tr)")]
    UnknownLocale { code: String },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a TOML error with context
    pub fn toml(context: impl Into<String>, source: toml::de::Error) -> Self {
        Self::Toml {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidContent {
            reason: reason.into(),
        }
    }

    pub fn duplicate_slug(slug: impl Into<String>) -> Self {
        Self::DuplicateSlug { slug: slug.into() }
    }

    pub fn unknown_timezone(name: impl Into<String>) -> Self {
        Self::UnknownTimezone { name: name.into() }
    }

    pub fn unknown_locale(code: impl Into<String>) -> Self {
        Self::UnknownLocale { code: code.into() }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
