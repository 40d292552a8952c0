//! Board and banner text

use std::fmt::Write;

use super::palette::stage_color;
use crate::consts::GRID_SIZE;
use crate::engine::{Cell, Grid};
use crate::session::{GameSession, GameStatus};
use crate::settings::Settings;

pub const TITLE: &str = "Startup 2048";

const CELL_WIDTH: usize = 10;
const RANKED_CELL_WIDTH: usize = 14;

const OVER_BANNER: &str = "Game Over!\n\
Unfortunately, you haven't managed to exit your startup.\n\
Try again! Press r to start over.";

const WON_BANNER: &str = "Congratulations! You've successfully exited your startup! \
It's time to build the next one!\n\
Press r to build your next startup.";

fn cell_text(cell: Cell, show_ranks: bool) -> String {
    match cell {
        None => String::new(),
        Some(stage) if show_ranks => format!("{} ({})", stage, stage.rank()),
        Some(stage) => stage.to_string(),
    }
}

/// The grid as a boxed table, one text line per row
pub fn render_board(grid: &Grid, settings: &Settings) -> String {
    let width = if settings.show_ranks {
        RANKED_CELL_WIDTH
    } else {
        CELL_WIDTH
    };
    let border = format!("+{}", format!("{}+", "-".repeat(width)).repeat(GRID_SIZE));

    let mut out = String::new();
    let _ = writeln!(out, "{border}");
    for row in grid.rows() {
        out.push('|');
        for &cell in row {
            let text = format!("{:^width$}", cell_text(cell, settings.show_ranks));
            if settings.color {
                out.push_str(&stage_color(cell).paint(&text));
            } else {
                out.push_str(&text);
            }
            out.push('|');
        }
        out.push('\n');
        let _ = writeln!(out, "{border}");
    }
    out
}

/// Banner for a finished game, `None` while it is still running
pub fn render_status(session: &GameSession) -> Option<&'static str> {
    match session.status() {
        GameStatus::InProgress => None,
        GameStatus::Won => Some(WON_BANNER),
        GameStatus::Over => Some(OVER_BANNER),
    }
}

pub fn render_help() -> &'static str {
    "Move: w/a/s/d, h/j/k/l, arrow keys or up/down/left/right\n\
     r: new game   q: quit   ?: help"
}

/// Everything the shell prints after an input
pub fn render_screen(session: &GameSession, settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "Score: {}", session.score());
    out.push('\n');
    out.push_str(&render_board(session.grid(), settings));

    match render_status(session) {
        Some(banner) => {
            out.push('\n');
            out.push_str(banner);
            out.push('\n');
        }
        None if settings.show_controls => {
            out.push('\n');
            out.push_str(render_help());
            out.push('\n');
        }
        None => {}
    }
    out
}
