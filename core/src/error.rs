use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates are outside the board")]
    OutOfBounds,
    #[error("Game already ended, no new moves are accepted")]
    GameOver,
    #[error("Board size and mine count do not make a playable game")]
    InvalidConfiguration,
    #[error("Board text is malformed")]
    MalformedState,
}

pub type Result<T> = core::result::Result<T, GameError>;
