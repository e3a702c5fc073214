use hecs::World;
use rand::Rng;

use crate::{Ball, Config, Events, GameRng, ModeParams, Paddle, Side};

/// Upper bound on the Infinite-mode ball set. Duplication is intentionally
/// explosive; this keeps the set finite without changing small-set behavior.
pub const MAX_BALLS: usize = 4096;

/// Resolve ball/paddle contacts.
///
/// Standard modes: clamp the ball out of the paddle, force the rebound
/// direction, add the spin term from the paddle's own motion, then apply
/// the mode's contact boost. Infinite mode: plain reflection with the
/// `just_hit` debounce, plus one whole-set duplication per tick when at
/// least one first-contact hit occurred.
pub fn check_paddle_collisions(
    world: &mut World,
    config: &Config,
    params: &ModeParams,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mut player_paddle = None;
    let mut opponent_paddle = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Player => player_paddle = Some(*paddle),
            Side::Opponent => opponent_paddle = Some(*paddle),
        }
    }

    let player_face = config.paddle_x(Side::Player) + config.paddle_width;
    let opponent_face = config.paddle_x(Side::Opponent);

    let mut first_contact = false;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let mut overlapping = false;

        if let Some(paddle) = player_paddle {
            if ball.pos.x - ball.radius < player_face
                && ball.pos.y > paddle.y
                && ball.pos.y < paddle.y + paddle.height
            {
                overlapping = true;
                if !(params.multi_ball && ball.just_hit) {
                    ball.pos.x = player_face + ball.radius;
                    ball.vel.x = ball.vel.x.abs();
                    if params.multi_ball {
                        ball.just_hit = true;
                    } else {
                        ball.vel.y += paddle.velocity() * config.spin_factor;
                        ball.vel *= params.contact_boost;
                        cap_velocity(ball, config);
                    }
                    events.ball_hit_paddle = true;
                    first_contact = true;
                }
            }
        }

        if let Some(paddle) = opponent_paddle {
            if ball.pos.x + ball.radius > opponent_face
                && ball.pos.y > paddle.y
                && ball.pos.y < paddle.y + paddle.height
            {
                overlapping = true;
                if !(params.multi_ball && ball.just_hit) {
                    ball.pos.x = opponent_face - ball.radius;
                    ball.vel.x = -ball.vel.x.abs();
                    if params.multi_ball {
                        ball.just_hit = true;
                    } else {
                        ball.vel.y += paddle.velocity() * config.spin_factor;
                        ball.vel *= params.contact_boost;
                        cap_velocity(ball, config);
                    }
                    events.ball_hit_paddle = true;
                    first_contact = true;
                }
            }
        }

        if params.multi_ball && !overlapping {
            ball.just_hit = false;
        }
    }

    if params.multi_ball && first_contact {
        duplicate_ball_set(world, rng);
    }
}

fn cap_velocity(ball: &mut Ball, config: &Config) {
    let cap = config.ball_speed_ceiling;
    ball.vel.x = ball.vel.x.clamp(-cap, cap);
    ball.vel.y = ball.vel.y.clamp(-cap, cap);
}

/// Clone every live ball once. Clones get a slight vertical jitter so the
/// pairs separate over the following ticks.
fn duplicate_ball_set(world: &mut World, rng: &mut GameRng) {
    let existing: Vec<Ball> = world.query::<&Ball>().iter().map(|(_e, b)| *b).collect();
    let room = MAX_BALLS.saturating_sub(existing.len());

    for original in existing.into_iter().take(room) {
        let mut clone = original;
        clone.vel.y += rng.0.gen_range(-1.0..1.0);
        clone.just_hit = original.just_hit;
        world.spawn((clone,));
    }
}
