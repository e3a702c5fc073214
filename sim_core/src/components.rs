use glam::Vec2;

/// Which side of the arena an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Paddle component. `y` is the top edge; `prev_y` is last tick's top edge
/// and feeds the spin term on ball contact.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
    pub height: f32,
    pub prev_y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32, height: f32) -> Self {
        Self {
            side,
            y,
            height,
            prev_y: y,
        }
    }

    pub fn center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Y displacement over the last tick
    pub fn velocity(&self) -> f32 {
        self.y - self.prev_y
    }
}

/// Movement intent for the player paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = hold, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component. `just_hit` is the per-tick contact debounce used by
/// Infinite mode so a continuous overlap counts as one hit.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub just_hit: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            just_hit: false,
        }
    }

    /// Fresh serve: arena center, random horizontal direction, random
    /// vertical angle, both scaled by the mode's speed multiplier.
    pub fn serve(
        config: &crate::Config,
        params: &crate::ModeParams,
        rolled_radius: Option<f32>,
        rng: &mut crate::GameRng,
    ) -> Self {
        use rand::Rng;

        let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vx = sign * config.serve_speed_x * params.speed_mult;
        let vy = rng
            .0
            .gen_range(-config.serve_speed_y_max..=config.serve_speed_y_max)
            * params.speed_mult;

        let radius = if params.big_ball {
            crate::params::Params::BIG_BALL_RADIUS
        } else if params.resample {
            // Trippy keeps its current roll across serves
            rolled_radius.unwrap_or(config.ball_radius)
        } else {
            config.ball_radius
        };

        Ball::new(
            Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0),
            Vec2::new(vx, vy),
            radius,
        )
    }
}

/// Decaying echo particle emitted in Trippy mode
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alpha: f32,
}
