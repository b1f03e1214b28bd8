use game_core::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game loop is already running")]
    AlreadyRunning,
    #[error("no scene loaded")]
    NoScene,
    #[error("game board dimensions have not been set")]
    NoBoard,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("failed to decode saved game: {0}")]
    Decode(#[from] postcard::Error),
    #[error(transparent)]
    Scene(#[from] SceneError),
}
