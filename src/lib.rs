//! Startup 2048 - a tile-merging puzzle themed around funding stages
//!
//! Core modules:
//! - `engine`: Pure board engine (grid, merge/move, spawn, terminal detection)
//! - `session`: Shell-held game state with derived status
//! - `highscores`: In-memory leaderboard of finished runs
//! - `settings`: User preferences loaded from JSON
//! - `platform`: Raw input mapping
//! - `renderer`: Text rendering of the board

pub mod engine;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;

pub use engine::{Direction, EngineError, Grid, MoveOutcome, Stage, apply_move};
pub use highscores::HighScores;
pub use session::{GameSession, GameStatus, TurnOutcome};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Side length of the square grid
    pub const GRID_SIZE: usize = 4;
    /// Total number of cells on the grid
    pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
    /// Tiles placed on a fresh board
    pub const INITIAL_TILES: usize = 2;
    /// Number of lowest-ranked stages a spawned tile is drawn from
    pub const SPAWN_STAGE_COUNT: usize = 2;
}
