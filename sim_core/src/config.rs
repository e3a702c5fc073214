use crate::params::Params;
use crate::Side;

/// Runtime copy of the arena/paddle/ball geometry
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub serve_speed_x: f32,
    pub serve_speed_y_max: f32,
    pub ball_speed_ceiling: f32,
    pub rally_amplify: f32,
    pub spin_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_x: Params::SERVE_SPEED_X,
            serve_speed_y_max: Params::SERVE_SPEED_Y_MAX,
            ball_speed_ceiling: Params::BALL_SPEED_CEILING,
            rally_amplify: Params::RALLY_AMPLIFY,
            spin_factor: Params::SPIN_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Clamp a paddle's top edge to the arena
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        y.clamp(0.0, self.arena_height - height)
    }
}
