//! Error types for the library.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything a library operation can fail with.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Course not found for the given ID
    #[error("Course with ID {id} not found")]
    CourseNotFound { id: u64 },
    /// Category not found for the given ID
    #[error("Category with ID {id} not found")]
    CategoryNotFound { id: u64 },
    /// Requested library file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },
    /// Caller is not allowed to perform the operation
    #[error("Permission denied: {action} requires a privileged caller")]
    PermissionDenied { action: String },
    /// Requested file resolves outside the library root
    #[error("Access denied: '{path}' is outside the library root")]
    AccessDenied { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl LibraryError {
    /// Wraps a store failure with what was being attempted.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Rejects a caller-supplied `field`.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error from a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the error names a missing course, category or file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CourseNotFound { .. } | Self::CategoryNotFound { .. } | Self::FileNotFound { .. }
        )
    }

    /// Whether the error is a privilege or containment refusal.
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. } | Self::AccessDenied { .. })
    }
}

/// Attaches a message to rusqlite errors.
pub trait DatabaseResultExt<T> {
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|source| LibraryError::database(message, source))
    }
}

/// Extension trait attaching the offending path to I/O errors.
pub trait FileSystemResultExt<T> {
    /// Map an I/O error to [`LibraryError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| LibraryError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
