use thiserror::Error;

/// Errors raised while building or restoring a scene
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("invalid paddle side {0}: must be 0 (left) or 1 (right)")]
    InvalidSide(u8),
    #[error("score cannot be negative: {0}")]
    NegativeScore(i64),
    #[error("invalid scene state: {0}")]
    InvalidState(String),
}
