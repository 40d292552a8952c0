//! Game session state
//!
//! Everything the shell holds between moves: the current grid, score,
//! the sticky "ever won" bit and the seeded RNG. The engine itself stays
//! stateless; this is the single owner it is called on behalf of.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::engine::{self, Direction, Grid, Pos, Stage};

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted
    InProgress,
    /// An Exit tile has been produced this game (takes precedence over Over)
    Won,
    /// No move can change the grid
    Over,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Over)
    }
}

/// What happened to a single directional input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game has already finished; the input was dropped
    Ignored,
    /// The direction could not change the grid
    Unchanged,
    Moved {
        score_delta: u64,
        spawned: Option<(Pos, Stage)>,
        status: GameStatus,
    },
}

/// One game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Seed of the current game, for reproducibility
    seed: u64,
    rng: Pcg32,
    grid: Grid,
    score: u64,
    /// Latched once an Exit tile is produced
    ever_won: bool,
    /// Accepted (board-changing) moves this game
    moves: u32,
}

impl GameSession {
    /// Start a new game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let grid = engine::create_initial_board(&mut rng);
        log::info!("New game with seed: {}", seed);

        Self {
            seed,
            rng,
            grid,
            score: 0,
            ever_won: false,
            moves: 0,
        }
    }

    /// Resume from an existing grid and score, mostly for tests and replays
    pub fn from_parts(seed: u64, grid: Grid, score: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            score,
            ever_won: grid.has_exit(),
            moves: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn has_won(&self) -> bool {
        self.ever_won
    }

    pub fn status(&self) -> GameStatus {
        if self.ever_won {
            GameStatus::Won
        } else if self.grid.is_terminal() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Forward one directional input to the engine
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.is_finished() {
            log::debug!("Ignoring {} after game end", direction.as_str());
            return TurnOutcome::Ignored;
        }

        let outcome = self.grid.apply_move(direction, self.score, &mut self.rng);
        if !outcome.changed {
            return TurnOutcome::Unchanged;
        }

        let score_delta = outcome.score.saturating_sub(self.score);
        self.grid = outcome.grid;
        self.score = outcome.score;
        self.ever_won |= outcome.won;
        self.moves += 1;

        let status = self.status();
        log::debug!(
            "Move {} {}: +{} (score {})",
            self.moves,
            direction.as_str(),
            score_delta,
            self.score
        );
        match status {
            GameStatus::Won if outcome.won => {
                log::info!("Exit reached after {} moves, score {}", self.moves, self.score)
            }
            GameStatus::Over => log::info!("No moves left, final score {}", self.score),
            _ => {}
        }

        TurnOutcome::Moved {
            score_delta,
            spawned: outcome.spawned,
            status,
        }
    }

    /// Throw the current game away and start over
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}
