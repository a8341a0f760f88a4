//! Keyboard mapping
//!
//! Turns `KeyboardEvent.code` values into simulation commands.

use crate::sim::Command;

/// Command for a key code, or `None` for keys the game doesn't use
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "ArrowLeft" => Some(Command::MoveLeft),
        "ArrowRight" => Some(Command::MoveRight),
        "Space" => Some(Command::Fire),
        _ => None,
    }
}

/// Control hints shown next to the playfield
pub const CONTROL_HINTS: [(&str, &str); 3] = [
    ("Left Arrow", "Move Left"),
    ("Right Arrow", "Move Right"),
    ("Space", "Shoot"),
];
