//! Error types for reading sessions.

use thiserror::Error;

/// Result type for session operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors that can occur during a reading.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// No tableau has been cast yet.
    #[error("no tableau cast yet (try 'cast')")]
    NoTableau,

    /// No card is selected.
    #[error("no card selected")]
    NoSelection,

    /// No card in the tableau has this sequence number.
    #[error("no card #{0} in the tableau")]
    CardNotFound(u32),

    /// A command argument could not be understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Engine error.
    #[error("{0}")]
    Core(#[from] sd_core::CoreError),
}
