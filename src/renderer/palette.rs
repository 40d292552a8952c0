//! Stage colors

use crate::engine::{Cell, Stage};

/// Background color of a cell, named after the web palette it mirrors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageColor {
    Gray,
    Blue,
    Green,
    Yellow,
    Red,
    Purple,
    Indigo,
    Pink,
    Orange,
    Teal,
    Emerald,
}

impl StageColor {
    /// xterm 256-color index of the background
    pub const fn ansi_256(self) -> u8 {
        match self {
            StageColor::Gray => 254,
            StageColor::Blue => 153,
            StageColor::Green => 157,
            StageColor::Yellow => 229,
            StageColor::Red => 217,
            StageColor::Purple => 183,
            StageColor::Indigo => 147,
            StageColor::Pink => 218,
            StageColor::Orange => 223,
            StageColor::Teal => 122,
            StageColor::Emerald => 42,
        }
    }

    /// Wrap `text` in background/foreground escapes
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[48;5;{}m\x1b[38;5;16m{}\x1b[0m", self.ansi_256(), text)
    }
}

pub const fn stage_color(cell: Cell) -> StageColor {
    match cell {
        None => StageColor::Gray,
        Some(Stage::Angel) => StageColor::Blue,
        Some(Stage::PreSeed) => StageColor::Green,
        Some(Stage::Seed) => StageColor::Yellow,
        Some(Stage::SeriesA) => StageColor::Red,
        Some(Stage::SeriesB) => StageColor::Purple,
        Some(Stage::SeriesC) => StageColor::Indigo,
        Some(Stage::SeriesD) => StageColor::Pink,
        Some(Stage::PreIpo) => StageColor::Orange,
        Some(Stage::Ipo) => StageColor::Teal,
        Some(Stage::Exit) => StageColor::Emerald,
    }
}
