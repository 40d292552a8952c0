//! Random draws behind an injectable source
//!
//! Every draw the engine makes goes through [`RandomSource::pick`], so a
//! seeded generator or a scripted sequence fully determines a game.

use std::collections::VecDeque;

use rand::Rng;
use rand_pcg::Pcg32;

use super::error::{EngineError, Result};
use super::grid::{Grid, Pos};
use super::stage::Stage;
use crate::consts::{CELL_COUNT, GRID_SIZE, SPAWN_STAGE_COUNT};

/// Source of uniform indices
pub trait RandomSource {
    /// A uniform value in `0..upper`. Callers never pass `upper == 0`.
    fn pick(&mut self, upper: usize) -> usize;
}

impl RandomSource for Pcg32 {
    fn pick(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, each reduced modulo the requested bound.
/// Once the sequence runs out every draw is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, upper: usize) -> usize {
        self.draws.pop_front().map_or(0, |draw| draw % upper)
    }
}

/// A stage for a new tile, uniform over the lowest-ranked stages
pub fn random_stage<R: RandomSource + ?Sized>(rng: &mut R) -> Stage {
    Stage::ALL[rng.pick(SPAWN_STAGE_COUNT)]
}

/// A fresh board with two tiles at distinct random positions
pub fn create_initial_board<R: RandomSource + ?Sized>(rng: &mut R) -> Grid {
    let first = rng.pick(CELL_COUNT);
    let mut second = rng.pick(CELL_COUNT - 1);
    if second >= first {
        second += 1;
    }

    let mut grid = Grid::EMPTY;
    for index in [first, second] {
        let pos = (index / GRID_SIZE, index % GRID_SIZE);
        let stage = random_stage(rng);
        // Indices are below CELL_COUNT so the position is always in range
        if let Err(err) = grid.set(pos, Some(stage)) {
            log::warn!("Skipping initial tile: {err}");
        }
    }
    grid
}

/// Place one new tile on a uniformly chosen empty cell
pub fn spawn_tile<R: RandomSource + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(Pos, Stage)> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return Err(EngineError::GridFull);
    }

    let pos = empty[rng.pick(empty.len())];
    let stage = random_stage(rng);
    grid.set(pos, Some(stage))?;
    Ok((pos, stage))
}
