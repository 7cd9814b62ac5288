//! Error types for the divination engine.

/// Errors raised while configuring or constructing engine values.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The bowl layout cannot host a tableau.
    #[error("invalid bowl layout: {0}")]
    InvalidLayout(String),

    /// A leaf image id outside `1..=TOTAL_LEAVES`.
    #[error("leaf id {0} out of range (expected 1-42)")]
    LeafOutOfRange(u32),

    /// A layout file could not be read.
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    /// A layout file could not be parsed.
    #[error("failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;
