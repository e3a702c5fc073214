use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::params::Params;
use crate::{Ball, Config, Effects, GameRng, ModeParams, Paddle, Particle, TrailPoint};

/// Advance the mode-specific visual state: Trippy's timed dimension
/// re-rolls and echo particles, and Art's persistent hue trail.
pub fn tick_effects(
    world: &mut World,
    config: &Config,
    params: &ModeParams,
    effects: &mut Effects,
    rng: &mut GameRng,
) {
    if params.resample {
        if effects.resample_timer == 0 {
            resample_dimensions(world, config, effects, rng);
            effects.resample_timer = rng
                .0
                .gen_range(Params::RESAMPLE_MIN_TICKS..=Params::RESAMPLE_MAX_TICKS);
        } else {
            effects.resample_timer -= 1;
        }

        spawn_echoes(world, rng);
    }

    decay_particles(world);

    if params.trail {
        let ball_pos = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos);
        if let Some(pos) = ball_pos {
            effects.trail.push(TrailPoint {
                pos,
                hue: effects.hue,
            });
            if effects.trail.len() > Params::TRAIL_MAX_POINTS {
                effects.trail.remove(0);
            }
            effects.hue = (effects.hue + Params::HUE_STEP) % 360.0;
        }
    }
}

/// Re-roll the shared paddle height and the ball radius
fn resample_dimensions(world: &mut World, config: &Config, effects: &mut Effects, rng: &mut GameRng) {
    let height = rng
        .0
        .gen_range(Params::TRIPPY_PADDLE_MIN..=Params::TRIPPY_PADDLE_MAX);
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.height = height;
        paddle.y = config.clamp_paddle_y(paddle.y, height);
    }

    let radius = rng
        .0
        .gen_range(Params::TRIPPY_RADIUS_MIN..=Params::TRIPPY_RADIUS_MAX);
    effects.rolled_radius = Some(radius);
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.radius = radius;
    }
}

/// With a small per-tick chance, emit a faint echo at each ball's position
fn spawn_echoes(world: &mut World, rng: &mut GameRng) {
    let mut spawned = Vec::new();
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if rng.0.gen::<f32>() < Params::ECHO_CHANCE {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.0.gen_range(0.5..2.0);
            spawned.push(Particle {
                pos: ball.pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                alpha: 1.0,
            });
        }
    }
    for particle in spawned {
        world.spawn((particle,));
    }
}

fn decay_particles(world: &mut World) {
    let mut dead = Vec::new();
    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel;
        particle.alpha -= Params::ECHO_FADE;
        if particle.alpha <= 0.0 {
            dead.push(entity);
        }
    }
    for entity in dead {
        let _ = world.despawn(entity);
    }
}
