use thiserror::Error;

/// Errors the engine can actually produce.
///
/// Scoring and filtering are total over whatever data they are given:
/// missing fields score zero and malformed records drop out of filters.
/// Data-source failures are degraded to empty results at the client seam,
/// so only configuration parsing is fallible.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
