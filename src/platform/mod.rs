//! Platform abstraction layer
//!
//! Turns raw terminal input into game commands.

pub mod input;

pub use input::{Command, parse_command};
