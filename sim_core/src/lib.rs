pub mod components;
pub mod config;
pub mod modes;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use modes::*;
pub use resources::*;
pub use session::*;
pub use systems::InputState;

use hecs::World;
use systems::*;

/// Advance the simulation by one fixed-size tick.
///
/// One call is one tick; there is no delta-time scaling. Order matters:
/// balls move and collide against the paddle positions from the previous
/// tick, scoring resolves exits, and only then do the paddles move.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    params: &ModeParams,
    input: InputState,
    score: &mut Score,
    events: &mut Events,
    effects: &mut Effects,
    rng: &mut GameRng,
) {
    events.clear();

    apply_player_intent(world, input);
    move_balls(world, config, params, events);
    check_paddle_collisions(world, config, params, events, rng);
    check_scoring(world, config, params, score, events, effects, rng);
    move_ai_paddle(world, config, params);
    move_player_paddle(world, config);
    tick_effects(world, config, params, effects, rng);
}

/// Spawn a paddle centered in the arena
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let y = (config.arena_height - config.paddle_height) / 2.0;
    world.spawn((
        Paddle::new(side, y, config.paddle_height),
        PaddleIntent::new(),
    ))
}

/// Spawn a ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
