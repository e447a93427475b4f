use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mvnw-gen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of wrapper generation proper.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An embedded launcher script is missing from the binary.
    #[error("Launcher resource '{name}' is not embedded in this build")]
    ResourceMissing { name: String },

    /// The wrapper destination directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing (or reading for a copy) a generated file failed.
    #[error("Failed to {operation} {}: {source}", path.display())]
    Write {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The Maven version could not be determined from the environment.
    #[error("Could not detect Maven version: {0}")]
    RuntimeInfoUnavailable(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn write<P: Into<PathBuf>>(
        operation: &'static str,
        path: P,
        source: io::Error,
    ) -> Self {
        AppError::Write { operation, path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DirectoryCreation { source, .. } | AppError::Write { source, .. } => {
                source.kind()
            }
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::ResourceMissing { .. } | AppError::RuntimeInfoUnavailable(_) => {
                io::ErrorKind::NotFound
            }
        }
    }
}
