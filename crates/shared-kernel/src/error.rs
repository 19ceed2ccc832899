// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SharedMemoryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SharedMemoryError>,
    },

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, SharedMemoryError>;

/// Errors raised while handing the identity to an output.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Write { target: "output".to_string(), source: err }
    }
}

impl From<std::io::Error> for SharedMemoryError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SharedMemoryError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SharedMemoryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SharedMemoryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
