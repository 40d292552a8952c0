use thiserror::Error;

use super::stage::Stage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown stage label: {0:?}")]
    UnknownStage(String),
    #[error("Cannot promote past {0}")]
    PromotionOutOfRange(Stage),
    #[error("No empty cell to spawn into")]
    GridFull,
    #[error("Position ({0}, {1}) is outside the grid")]
    InvalidPosition(usize, usize),
    #[error("Grid must have exactly 4 rows of 4 cells")]
    InvalidGridShape,
}

pub type Result<T> = core::result::Result<T, EngineError>;
