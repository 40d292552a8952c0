//! Funding stages, the tile values of the board

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A tile value. Declaration order is the merge order, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    Angel,
    #[serde(rename = "Pre-seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    #[serde(rename = "Series C")]
    SeriesC,
    #[serde(rename = "Series D")]
    SeriesD,
    #[serde(rename = "Pre-IPO")]
    PreIpo,
    #[serde(rename = "IPO")]
    Ipo,
    Exit,
}

impl Stage {
    /// Every stage in merge order
    pub const ALL: [Stage; 10] = [
        Stage::Angel,
        Stage::PreSeed,
        Stage::Seed,
        Stage::SeriesA,
        Stage::SeriesB,
        Stage::SeriesC,
        Stage::SeriesD,
        Stage::PreIpo,
        Stage::Ipo,
        Stage::Exit,
    ];

    /// The terminal stage; producing it wins the game
    pub const LAST: Stage = Stage::Exit;

    /// 0-based position in the ordering
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 1-based position in the ordering, the score awarded for producing this stage
    pub const fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Self::ALL.get(index).copied()
    }

    /// The stage two equal tiles merge into, `None` past the end of the ordering
    pub fn promote(self) -> Option<Stage> {
        Self::from_index(self.index() + 1)
    }

    /// Like [`Stage::promote`] but reports the guard as an error
    pub fn try_promote(self) -> Result<Stage, EngineError> {
        self.promote().ok_or(EngineError::PromotionOutOfRange(self))
    }

    pub const fn is_exit(self) -> bool {
        matches!(self, Stage::Exit)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Stage::Angel => "Angel",
            Stage::PreSeed => "Pre-seed",
            Stage::Seed => "Seed",
            Stage::SeriesA => "Series A",
            Stage::SeriesB => "Series B",
            Stage::SeriesC => "Series C",
            Stage::SeriesD => "Series D",
            Stage::PreIpo => "Pre-IPO",
            Stage::Ipo => "IPO",
            Stage::Exit => "Exit",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownStage(s.to_string()))
    }
}
