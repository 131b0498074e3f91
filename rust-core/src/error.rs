use thiserror::Error;

/// Errors returned while building ribbons and heteroribbons.
#[derive(Debug, Error)]
pub enum RibbonError {
    /// A parameter can never produce a structure (bad width, unknown kind, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two consecutive sections can not be joined without lone atoms.
    #[error("error at junction between sections {previous} and {current}. {message}")]
    Junction {
        previous: String,
        current: String,
        message: String,
    },

    /// The requested placement does not exist geometrically.
    #[error("geometry error: {0}")]
    Geometry(String),
}

impl RibbonError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }
}

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, RibbonError>;
