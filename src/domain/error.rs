use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::domain::form::ValidationErrors;

/// Library-wide error type for componentry operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Machine name is invalid.
    #[error(
        "Invalid machine name '{0}': must contain only lowercase letters, numbers, and underscores (max 64)"
    )]
    InvalidMachineName(String),

    /// Component type is not one of the authored kinds.
    #[error("Invalid component type '{0}': must be one of block, library, plugin")]
    InvalidComponentType(String),

    /// Asset kind is not js or css.
    #[error("Invalid asset kind '{0}': must be js or css")]
    InvalidAssetKind(String),

    /// Component discovery could not read a configured source.
    #[error("Component discovery unavailable at {}: {details}", path.display())]
    DiscoveryUnavailable { path: PathBuf, details: String },

    /// Form submission failed validation.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Definition could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidMachineName(_)
            | AppError::InvalidComponentType(_)
            | AppError::InvalidAssetKind(_)
            | AppError::Validation(_)
            | AppError::ParseError { .. }
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::DiscoveryUnavailable { .. } => io::ErrorKind::NotFound,
            AppError::Write(err) => err.kind(),
        }
    }
}

/// Failure while persisting a component definition.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied writing {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize component definition: {0}")]
    SerializationFailed(String),

    /// Create-exclusive write found the file already present.
    #[error("Component definition already exists at {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error(
        "Writing {} did not finish within {}ms; the write may still complete in the background, so check the file before retrying",
        path.display(),
        after.as_millis()
    )]
    Timeout { path: PathBuf, after: Duration },
}

impl WriteError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            WriteError::DirectoryCreateFailed { source, .. }
            | WriteError::WriteFailed { source, .. } => source.kind(),
            WriteError::PermissionDenied { .. } => io::ErrorKind::PermissionDenied,
            WriteError::SerializationFailed(_) => io::ErrorKind::InvalidData,
            WriteError::AlreadyExists { .. } => io::ErrorKind::AlreadyExists,
            WriteError::Timeout { .. } => io::ErrorKind::TimedOut,
        }
    }

    /// Classify an I/O failure on the definition file itself.
    pub(crate) fn from_file_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => WriteError::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => WriteError::AlreadyExists { path },
            _ => WriteError::WriteFailed { path, source },
        }
    }
}
