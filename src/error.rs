use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),
    #[error("Cell ({x}, {y}) is occupied")]
    OccupiedCell { x: i32, y: i32 },
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
