use hecs::World;

use crate::{Paddle, PaddleIntent, Side};

/// Level-triggered movement intents from the external input collector.
/// Overwritten wholesale every tick; no queuing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub move_up: bool,
    pub move_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(&self) -> i8 {
        match (self.move_up, self.move_down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}

/// Translate the current input flags into the player paddle's intent
pub fn apply_player_intent(world: &mut World, input: InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == Side::Player {
            intent.dir = input.dir();
        }
    }
}
