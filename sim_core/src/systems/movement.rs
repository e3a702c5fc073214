use hecs::World;

use crate::{Ball, Config, Events, ModeParams, Paddle, PaddleIntent, Side};

/// Integrate ball motion and resolve top/bottom wall bounces.
///
/// The bottom-wall bounce speeds up the rally in non-gravity modes; Gravity
/// mode instead re-injects the energy the downward pull would bleed off.
/// Infinite mode never amplifies.
pub fn move_balls(world: &mut World, config: &Config, params: &ModeParams, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if params.gravity > 0.0 {
            ball.vel.y += params.gravity;
        }

        ball.pos += ball.vel;

        let r = ball.radius;
        if ball.pos.y - r < 0.0 {
            ball.pos.y = r;
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
        if ball.pos.y + r > config.arena_height {
            ball.pos.y = config.arena_height - r;
            if params.gravity > 0.0 {
                ball.vel.y = -(ball.vel.y.abs() + params.gravity);
            } else {
                ball.vel.y = -ball.vel.y.abs();
                if !params.multi_ball {
                    ball.vel.x = (ball.vel.x * config.rally_amplify)
                        .clamp(-config.ball_speed_ceiling, config.ball_speed_ceiling);
                }
            }
            events.ball_hit_wall = true;
        }
    }
}

/// Move the player paddle by its intent, clamped to the arena
pub fn move_player_paddle(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if paddle.side != Side::Player {
            continue;
        }
        paddle.prev_y = paddle.y;
        if intent.dir != 0 {
            let y = paddle.y + intent.dir as f32 * config.paddle_speed;
            paddle.y = config.clamp_paddle_y(y, paddle.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;
    use glam::Vec2;

    fn single_ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball")
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let config = Config::new();
        let params = Mode::Medium.params();
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(400.0, 200.0), Vec2::new(4.0, -2.0), 8.0),));

        move_balls(&mut world, &config, &params, &mut events);

        let ball = single_ball(&world);
        assert_eq!(ball.pos, Vec2::new(404.0, 198.0));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_top_wall_reflects_and_clamps() {
        let mut world = World::new();
        let config = Config::new();
        let params = Mode::Medium.params();
        let mut events = Events::new();
        world.spawn((Ball::new(Vec2::new(400.0, 9.0), Vec2::new(4.0, -6.0), 8.0),));

        move_balls(&mut world, &config, &params, &mut events);

        let ball = single_ball(&world);
        assert_eq!(ball.pos.y, 8.0, "clamped to radius");
        assert!(ball.vel.y > 0.0, "reflected downward");
        assert_eq!(ball.vel.x, 4.0, "x untouched on top wall");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_bottom_wall_amplifies_rally() {
        let mut world = World::new();
        let config = Config::new();
        let params = Mode::Medium.params();
        let mut events = Events::new();
        world.spawn((Ball::new(
            Vec2::new(400.0, 391.0),
            Vec2::new(4.0, 6.0),
            8.0,
        ),));

        move_balls(&mut world, &config, &params, &mut events);

        let ball = single_ball(&world);
        assert_eq!(ball.pos.y, 392.0);
        assert!(ball.vel.y < 0.0, "reflected upward");
        assert!((ball.vel.x - 4.4).abs() < 1e-5, "vx amplified by 1.1");
    }

    #[test]
    fn test_gravity_bounce_keeps_energy() {
        let mut world = World::new();
        let config = Config::new();
        let params = Mode::Gravity.params();
        let mut events = Events::new();
        world.spawn((Ball::new(
            Vec2::new(400.0, 391.0),
            Vec2::new(4.0, 6.0),
            8.0,
        ),));

        move_balls(&mut world, &config, &params, &mut events);

        let ball = single_ball(&world);
        // vy after pull is 6.3; bounce returns -(6.3 + 0.3)
        assert!((ball.vel.y + 6.6).abs() < 1e-5);
        assert_eq!(ball.vel.x, 4.0, "no rally amplification under gravity");
    }

    #[test]
    fn test_infinite_mode_never_amplifies() {
        let mut world = World::new();
        let config = Config::new();
        let params = Mode::Infinite.params();
        let mut events = Events::new();
        world.spawn((Ball::new(
            Vec2::new(400.0, 391.0),
            Vec2::new(4.0, 6.0),
            8.0,
        ),));

        move_balls(&mut world, &config, &params, &mut events);

        let ball = single_ball(&world);
        assert_eq!(ball.vel.x, 4.0);
    }

    #[test]
    fn test_player_paddle_moves_and_clamps() {
        let mut world = World::new();
        let config = Config::new();
        let entity = world.spawn((
            Paddle::new(Side::Player, 2.0, 80.0),
            PaddleIntent { dir: -1 },
        ));

        move_player_paddle(&mut world, &config);
        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 0.0, "clamped at the top wall");
        assert_eq!(paddle.prev_y, 2.0);

        for (_e, (_p, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            intent.dir = 1;
        }
        move_player_paddle(&mut world, &config);
        let paddle = *world.get::<&Paddle>(entity).unwrap();
        assert_eq!(paddle.y, 5.0);
        assert_eq!(paddle.velocity(), 5.0);
    }
}
