//! Directional moves
//!
//! A move merges every row (left/right) or every column (up/down) with
//! [`merge_line`], then spawns one tile if anything changed.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Line, Pos};
use super::merge::merge_line;
use super::random::{RandomSource, spawn_tile};
use super::stage::Stage;
use crate::consts::GRID_SIZE;

/// A direction to slide and merge tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Moves along rows rather than columns
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Tiles travel toward the high end of the line, so it is merged reversed
    const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A slide/merge without the spawn step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub grid: Grid,
    pub score_delta: u64,
    pub changed: bool,
    pub won: bool,
}

/// Result of [`apply_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub score: u64,
    pub changed: bool,
    /// An Exit tile was produced by this move
    pub won: bool,
    /// Tile placed after the slide, if any
    pub spawned: Option<(Pos, Stage)>,
}

fn merge_oriented(line: Line, direction: Direction) -> (Line, u64, bool) {
    if direction.is_reversed() {
        let mut reversed = line;
        reversed.reverse();
        let mut result = merge_line(reversed);
        result.line.reverse();
        (result.line, result.score_delta, result.won)
    } else {
        let result = merge_line(line);
        (result.line, result.score_delta, result.won)
    }
}

impl Grid {
    /// Slide and merge every line in `direction`, without spawning
    pub fn slide(&self, direction: Direction) -> Slide {
        let mut grid = *self;
        let mut score_delta = 0;
        let mut changed = false;
        let mut won = false;

        for index in 0..GRID_SIZE {
            let before = if direction.is_horizontal() {
                self.row(index)
            } else {
                self.column(index)
            };

            let (after, delta, line_won) = merge_oriented(before, direction);
            score_delta += delta;
            won |= line_won;
            changed |= after != before;

            if direction.is_horizontal() {
                grid.set_row(index, after);
            } else {
                grid.set_column(index, after);
            }
        }

        Slide {
            grid,
            score_delta,
            changed,
            won,
        }
    }

    /// Method form of [`apply_move`]
    pub fn apply_move<R: RandomSource + ?Sized>(
        &self,
        direction: Direction,
        score: u64,
        rng: &mut R,
    ) -> MoveOutcome {
        apply_move(self, direction, score, rng)
    }

    /// Whether sliding in `direction` would change anything
    pub fn can_move(&self, direction: Direction) -> bool {
        self.slide(direction).changed
    }
}

/// Apply one directional move.
///
/// An unchanged board is returned as-is with the original score and no
/// draw from `rng`. Otherwise the merge score is added and one tile is
/// spawned on a random empty cell.
pub fn apply_move<R: RandomSource + ?Sized>(
    grid: &Grid,
    direction: Direction,
    score: u64,
    rng: &mut R,
) -> MoveOutcome {
    let slide = grid.slide(direction);

    if !slide.changed {
        return MoveOutcome {
            grid: *grid,
            score,
            changed: false,
            won: false,
            spawned: None,
        };
    }

    let mut next = slide.grid;
    let spawned = match spawn_tile(&mut next, rng) {
        Ok(spawned) => Some(spawned),
        Err(err) => {
            log::warn!("No spawn after {} move: {err}", direction.as_str());
            None
        }
    };

    MoveOutcome {
        grid: next,
        score: score.saturating_add(slide.score_delta),
        changed: true,
        won: slide.won,
        spawned,
    }
}
