use hecs::World;

use crate::{Ball, Config, Effects, Events, GameRng, ModeParams, Score, Side};

/// Detect balls leaving the arena and award points.
///
/// Standard modes respawn the single ball in place (the session layers the
/// between-point pause on top). Infinite mode removes the exited ball and
/// only serves a fresh one when the set runs empty.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    params: &ModeParams,
    score: &mut Score,
    events: &mut Events,
    effects: &Effects,
    rng: &mut GameRng,
) {
    if params.multi_ball {
        let mut exited = Vec::new();
        for (entity, ball) in world.query::<&Ball>().iter() {
            if ball.pos.x - ball.radius < 0.0 {
                score.increment(Side::Opponent);
                events.opponent_points += 1;
                exited.push(entity);
            } else if ball.pos.x + ball.radius > config.arena_width {
                score.increment(Side::Player);
                events.player_points += 1;
                exited.push(entity);
            }
        }
        for entity in exited {
            let _ = world.despawn(entity);
        }
        if world.query::<&Ball>().iter().next().is_none() {
            let ball = Ball::serve(config, params, effects.rolled_radius, rng);
            world.spawn((ball,));
        }
    } else {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if ball.pos.x - ball.radius < 0.0 {
                score.increment(Side::Opponent);
                events.opponent_points += 1;
                *ball = Ball::serve(config, params, effects.rolled_radius, rng);
            } else if ball.pos.x + ball.radius > config.arena_width {
                score.increment(Side::Player);
                events.player_points += 1;
                *ball = Ball::serve(config, params, effects.rolled_radius, rng);
            }
        }
    }
}
