//! Text rendering module
//!
//! Draws the board, score and status banners as plain or ANSI-colored text.

pub mod palette;
pub mod text;

pub use palette::{StageColor, stage_color};
pub use text::{TITLE, render_board, render_help, render_screen, render_status};
