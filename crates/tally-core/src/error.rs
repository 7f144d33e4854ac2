use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Score store initialization failed: {0}")]
    InitializationFailure(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Storage fault: {0}")]
    StorageFault(String),

    #[error("Failed to shut down score store: {0}")]
    ShutdownFailure(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classify an engine error raised by a read or write.
    ///
    /// `SQLITE_CONSTRAINT` becomes [`Error::ConstraintViolation`], everything
    /// else a [`Error::StorageFault`].
    pub(crate) fn from_sqlite(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Error::ConstraintViolation(err.to_string()),
            _ => Error::StorageFault(err.to_string()),
        }
    }

    /// Wrap an engine error raised while opening or preparing the store.
    pub(crate) fn init(context: &str, err: impl std::fmt::Display) -> Self {
        Error::InitializationFailure(format!("{}: {}", context, err))
    }

    /// Only initialization failures stop the application.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::InitializationFailure(_))
    }

    /// Check if this error is a duplicate-key rejection
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Error::ConstraintViolation(_))
    }
}
