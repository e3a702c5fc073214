/// Fixed tuning parameters for the simulation
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and its wall
    pub const PADDLE_SPEED: f32 = 5.0; // px per tick

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BIG_BALL_RADIUS: f32 = 40.0;
    pub const SERVE_SPEED_X: f32 = 6.3; // px per tick, before mode multiplier
    pub const SERVE_SPEED_Y_MAX: f32 = 3.0; // serve vy drawn from [-max, max]
    pub const BALL_SPEED_CEILING: f32 = 48.0; // hard cap after boosts/rallies
    pub const RALLY_AMPLIFY: f32 = 1.1; // vx gain on a bottom-wall bounce
    pub const SPIN_FACTOR: f32 = 0.35; // paddle displacement -> ball vy

    // AI
    pub const AI_DEAD_ZONE: f32 = 10.0; // px around paddle center
    pub const PREDICT_MAX_TICKS: f32 = 60.0; // ballistic lookahead cap

    // Pacing
    pub const TICK_HZ: u32 = 60;
    pub const POINT_PAUSE_TICKS: u32 = 45; // beat between rallies

    // Trippy resampling
    pub const RESAMPLE_MIN_TICKS: u32 = 60; // 1s at 60 Hz
    pub const RESAMPLE_MAX_TICKS: u32 = 180; // 3s
    pub const TRIPPY_PADDLE_MIN: f32 = 30.0;
    pub const TRIPPY_PADDLE_MAX: f32 = 200.0;
    pub const TRIPPY_RADIUS_MIN: f32 = 8.0;
    pub const TRIPPY_RADIUS_MAX: f32 = 40.0;
    pub const ECHO_CHANCE: f32 = 0.1; // per tick
    pub const ECHO_FADE: f32 = 0.02; // alpha lost per tick

    // Art trail
    pub const HUE_STEP: f32 = 2.0; // degrees per tick
    pub const TRAIL_MAX_POINTS: usize = 4096;

    // Score
    pub const WIN_SCORE: u32 = 5;
    pub const WIN_SCORE_INFINITE: u32 = 5000;
}
