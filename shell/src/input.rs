//! Keyboard-to-intent translation for the headless shell

use sim_core::InputState;

/// Discrete commands the simulation consumes outside the per-tick intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Restart,
    SelectMode(&'static str),
}

/// Map a pressed key onto the level-triggered movement flags
pub fn handle_key_down(key: &str, input: &mut InputState) {
    match key {
        "ArrowUp" | "w" | "W" => input.move_up = true,
        "ArrowDown" | "s" | "S" => input.move_down = true,
        _ => {}
    }
}

pub fn handle_key_up(key: &str, input: &mut InputState) {
    match key {
        "ArrowUp" | "w" | "W" => input.move_up = false,
        "ArrowDown" | "s" | "S" => input.move_down = false,
        _ => {}
    }
}

/// Map a pressed key onto a discrete command, if it is bound to one
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        " " | "Enter" => Some(Command::Start),
        "r" | "R" => Some(Command::Restart),
        "1" => Some(Command::SelectMode("Easy")),
        "2" => Some(Command::SelectMode("Medium")),
        "3" => Some(Command::SelectMode("Hard")),
        "4" => Some(Command::SelectMode("Insane")),
        "5" => Some(Command::SelectMode("UltraInsane")),
        "6" => Some(Command::SelectMode("Insaniest")),
        "7" => Some(Command::SelectMode("BigBall")),
        "8" => Some(Command::SelectMode("Trippy")),
        "9" => Some(Command::SelectMode("Gravity")),
        "0" => Some(Command::SelectMode("Art")),
        "i" | "I" => Some(Command::SelectMode("Infinite")),
        _ => None,
    }
}
