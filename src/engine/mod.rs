//! Board engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No state held between calls
//! - Randomness only through an injected `RandomSource`
//! - Row-major iteration order everywhere
//! - No rendering or platform dependencies

pub mod error;
pub mod grid;
pub mod merge;
pub mod moves;
pub mod random;
pub mod stage;

pub use error::{EngineError, Result};
pub use grid::{Cell, Grid, Line, Pos, is_terminal};
pub use merge::{LineMerge, merge_line};
pub use moves::{Direction, MoveOutcome, Slide, apply_move};
pub use random::{RandomSource, ScriptedSource, create_initial_board, random_stage, spawn_tile};
pub use stage::Stage;
