use hecs::World;

use crate::params::Params;
use crate::{Ball, Config, ModeParams, Paddle, Side};

/// Drive the opponent paddle.
///
/// Non-gravity modes chase the ball directly with a dead-zone around the
/// paddle center. Gravity mode projects the ball forward under constant
/// acceleration and tracks the projected intercept. Infinite mode chases
/// whichever ball is deepest into the AI's half.
pub fn move_ai_paddle(world: &mut World, config: &Config, params: &ModeParams) {
    let target = pick_target(world, params);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        paddle.prev_y = paddle.y;

        let Some(ball) = target else { continue };

        let rate = config.paddle_speed * params.ai_gain;
        if params.gravity > 0.0 {
            let target_y = predict_intercept(&ball, config, params);
            let diff = target_y - paddle.center();
            paddle.y = config.clamp_paddle_y(paddle.y + diff.clamp(-rate, rate), paddle.height);
        } else {
            let center = paddle.center();
            if ball.pos.y > center + Params::AI_DEAD_ZONE {
                paddle.y = config.clamp_paddle_y(paddle.y + rate, paddle.height);
            } else if ball.pos.y < center - Params::AI_DEAD_ZONE {
                paddle.y = config.clamp_paddle_y(paddle.y - rate, paddle.height);
            }
        }
    }
}

fn pick_target(world: &World, params: &ModeParams) -> Option<Ball> {
    let mut query = world.query::<&Ball>();
    if params.multi_ball {
        query
            .iter()
            .map(|(_e, b)| *b)
            .max_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
    } else {
        query.iter().next().map(|(_e, b)| *b)
    }
}

/// Project the ball's y at the AI paddle's face under constant gravity,
/// clamped to the arena. Lookahead is capped so a slow ball cannot produce
/// an absurd projection.
fn predict_intercept(ball: &Ball, config: &Config, params: &ModeParams) -> f32 {
    let face = config.paddle_x(Side::Opponent);
    let ticks = if ball.vel.x > 0.0 {
        ((face - ball.pos.x) / ball.vel.x).clamp(0.0, Params::PREDICT_MAX_TICKS)
    } else {
        Params::PREDICT_MAX_TICKS
    };

    let projected = ball.pos.y + ball.vel.y * ticks + 0.5 * params.gravity * ticks * ticks;
    projected.clamp(ball.radius, config.arena_height - ball.radius)
}
