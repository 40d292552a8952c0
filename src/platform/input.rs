//! Input mapping
//!
//! One line of input becomes at most one command. Arrow keys arrive as
//! ANSI escape sequences when the terminal echoes them into the line.

use crate::engine::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Quit,
    Help,
}

pub fn parse_command(raw: &str) -> Option<Command> {
    use Command::*;

    let text = raw.trim().to_ascii_lowercase();
    let command = match text.as_str() {
        "w" | "k" | "up" | "\x1b[a" => Move(Direction::Up),
        "s" | "j" | "down" | "\x1b[b" => Move(Direction::Down),
        "a" | "h" | "left" | "\x1b[d" => Move(Direction::Left),
        "d" | "l" | "right" | "\x1b[c" => Move(Direction::Right),
        "r" | "reset" | "new" => Reset,
        "q" | "quit" | "exit" => Quit,
        "?" | "help" => Help,
        _ => return None,
    };
    Some(command)
}
