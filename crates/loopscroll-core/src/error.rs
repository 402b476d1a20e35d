/// Errors raised at the renderer boundary.
///
/// Degenerate inputs are rejected here so that scaling and tile-count
/// arithmetic never divides by zero. A failed call leaves the renderer
/// exactly as it was.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("renderer has not been configured with a viewport yet")]
    NotConfigured,
}

impl ScrollError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
