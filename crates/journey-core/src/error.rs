//! Error types for the journey library.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error from an arbitrary record-store backend.
pub type StoreError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Comprehensive error type for all journey operations.
#[derive(Error, Debug)]
pub enum JourneyError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The referenced project does not exist in the store
    #[error("Project '{identifier}' not found")]
    ProjectNotFound { identifier: String },
    /// Writing a generated journey back onto its project failed
    #[error("Failed to persist journey for project {project_id}: {source}")]
    PersistenceFailure {
        project_id: u64,
        #[source]
        source: StoreError,
    },
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
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Calendar arithmetic overflowed the supported date range
    #[error("Date arithmetic failed while {context}: {source}")]
    DateArithmetic {
        context: String,
        #[source]
        source: jiff::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> JourneyError {
        JourneyError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> JourneyError {
        JourneyError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl JourneyError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a backend error raised while writing a journey.
    pub fn persistence(project_id: u64, source: impl Into<StoreError>) -> Self {
        Self::PersistenceFailure {
            project_id,
            source: source.into(),
        }
    }

    /// Returns true for errors that mean the project could not be resolved.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| JourneyError::database(message).with_source(e))
    }
}

/// Extension trait attaching context to calendar arithmetic failures.
pub trait DateResultExt<T> {
    /// Map jiff errors, naming the computation that failed.
    fn date_context(self, context: &str) -> Result<T>;
}

impl<T> DateResultExt<T> for std::result::Result<T, jiff::Error> {
    fn date_context(self, context: &str) -> Result<T> {
        self.map_err(|source| JourneyError::DateArithmetic {
            context: context.to_string(),
            source,
        })
    }
}

/// Result type alias for journey operations
pub type Result<T> = std::result::Result<T, JourneyError>;
