use hecs::World;
use rand::Rng;
use tracing::{debug, warn};

use crate::params::Params;
use crate::{
    create_paddle, step, Ball, Config, Effects, Events, GameResult, GameRng, InputState, Mode,
    ModeParams, Paddle, PaddleIntent, Particle, Phase, Score, Side, TrailPoint,
};

/// Events surfaced to the external collaborators (renderer overlays, the
/// persistence sink, the audio sink). Drained by the driver after each tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Audio sink: switch the background track
    ModeChanged(Mode),
    PointScored {
        side: Side,
        score: Score,
    },
    GameEnded {
        result: GameResult,
        score: Score,
    },
    /// Persistence sink: a won game with a confirmed name
    ResultRecorded {
        name: String,
        score: u32,
        mode: Mode,
    },
}

/// One game of Pong: the world, its resources, and the lifecycle state.
///
/// All mutation goes through `tick` and the explicit lifecycle commands;
/// external collaborators read `snapshot` and drain `GameEvent`s.
pub struct Session {
    pub world: World,
    pub config: Config,
    pub mode: Mode,
    pub mode_params: ModeParams,
    pub phase: Phase,
    pub score: Score,
    pub events: Events,
    pub effects: Effects,
    pub rng: GameRng,
    pub outbox: Vec<GameEvent>,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::with_mode(Mode::default(), seed)
    }

    pub fn with_mode(mode: Mode, seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Player, &config);
        create_paddle(&mut world, Side::Opponent, &config);

        Self {
            world,
            config,
            mode,
            mode_params: mode.params(),
            phase: Phase::NotStarted,
            score: Score::new(),
            events: Events::new(),
            effects: Effects::new(),
            rng: GameRng::new(seed),
            outbox: Vec::new(),
        }
    }

    /// Begin play. Only meaningful from NotStarted.
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            debug!(phase = ?self.phase, "start ignored outside NotStarted");
            return;
        }
        self.phase = Phase::Playing;
        self.init_effects();
        self.serve();
    }

    /// Switch mode by external identifier. Unknown names are ignored and
    /// the current mode persists. A valid switch is always a full reset,
    /// even when the target mode is already active.
    pub fn select_mode(&mut self, name: &str) {
        match Mode::from_name(name) {
            Some(mode) => {
                self.mode = mode;
                self.mode_params = mode.params();
                self.fresh_game();
                self.outbox.push(GameEvent::ModeChanged(mode));
            }
            None => warn!(mode = name, "ignoring unknown mode selection"),
        }
    }

    /// Start a new game in the current mode after a game over
    pub fn restart(&mut self) {
        if !self.phase.is_game_over() {
            debug!(phase = ?self.phase, "restart ignored outside GameOver");
            return;
        }
        self.fresh_game();
    }

    /// Resolve the winner-name prompt. An empty or whitespace name is
    /// acknowledged but not recorded.
    pub fn submit_name(&mut self, name: &str) {
        if self.phase != Phase::AwaitingName {
            debug!(phase = ?self.phase, "name submission ignored");
            return;
        }
        let name = name.trim();
        if name.is_empty() {
            debug!("empty name, win goes unrecorded");
        } else {
            self.outbox.push(GameEvent::ResultRecorded {
                name: name.to_string(),
                score: self.score.player,
                mode: self.mode,
            });
        }
        self.phase = Phase::GameOver {
            result: GameResult::Win,
        };
    }

    pub fn skip_name(&mut self) {
        self.submit_name("");
    }

    /// Advance one tick. Does nothing outside Playing except counting down
    /// the between-point pause; AwaitingName suspends the game entirely.
    pub fn tick(&mut self, input: InputState) {
        match self.phase {
            Phase::PointPause { ticks_left } => {
                self.phase = if ticks_left <= 1 {
                    Phase::Playing
                } else {
                    Phase::PointPause {
                        ticks_left: ticks_left - 1,
                    }
                };
            }
            Phase::Playing => {
                step(
                    &mut self.world,
                    &self.config,
                    &self.mode_params,
                    input,
                    &mut self.score,
                    &mut self.events,
                    &mut self.effects,
                    &mut self.rng,
                );
                self.after_step();
            }
            Phase::NotStarted | Phase::AwaitingName | Phase::GameOver { .. } => {}
        }
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        let mut paddles: Vec<Paddle> = self
            .world
            .query::<&Paddle>()
            .iter()
            .map(|(_e, p)| *p)
            .collect();
        paddles.sort_by_key(|p| p.side != Side::Player);

        Snapshot {
            mode: self.mode,
            phase: self.phase,
            score: self.score,
            paddles,
            balls: self
                .world
                .query::<&Ball>()
                .iter()
                .map(|(_e, b)| *b)
                .collect(),
            particles: self
                .world
                .query::<&Particle>()
                .iter()
                .map(|(_e, p)| *p)
                .collect(),
            trail: self.effects.trail.clone(),
        }
    }

    fn after_step(&mut self) {
        for _ in 0..self.events.player_points {
            self.outbox.push(GameEvent::PointScored {
                side: Side::Player,
                score: self.score,
            });
        }
        for _ in 0..self.events.opponent_points {
            self.outbox.push(GameEvent::PointScored {
                side: Side::Opponent,
                score: self.score,
            });
        }

        if let Some(winner) = self.score.has_winner(self.mode_params.win_score) {
            self.freeze_balls();
            let result = match winner {
                Side::Player => GameResult::Win,
                Side::Opponent => GameResult::Lose,
            };
            self.phase = match winner {
                Side::Player => Phase::AwaitingName,
                Side::Opponent => Phase::GameOver { result },
            };
            self.outbox.push(GameEvent::GameEnded {
                result,
                score: self.score,
            });
        } else if !self.mode_params.multi_ball
            && self.events.player_points + self.events.opponent_points > 0
        {
            // The ball was already re-served by the scoring system; hold it
            // at center for the between-point beat.
            self.phase = Phase::PointPause {
                ticks_left: Params::POINT_PAUSE_TICKS,
            };
        }
    }

    /// Full reset into Playing under the current mode parameters
    fn fresh_game(&mut self) {
        self.score = Score::new();
        self.effects.clear();
        self.despawn_all::<Ball>();
        self.despawn_all::<Particle>();

        let default_y = (self.config.arena_height - self.config.paddle_height) / 2.0;
        for (_entity, (paddle, intent)) in
            self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            paddle.height = self.config.paddle_height;
            paddle.y = default_y;
            paddle.prev_y = default_y;
            intent.dir = 0;
        }

        self.phase = Phase::Playing;
        self.init_effects();
        self.serve();
    }

    fn init_effects(&mut self) {
        if self.mode_params.resample {
            self.effects.resample_timer = self
                .rng
                .0
                .gen_range(Params::RESAMPLE_MIN_TICKS..=Params::RESAMPLE_MAX_TICKS);
        }
    }

    fn serve(&mut self) {
        self.despawn_all::<Ball>();

        // Insaniest re-rolls the shared paddle height on every serve
        if self.mode_params.random_paddle_height && !self.mode_params.resample {
            let height = self
                .rng
                .0
                .gen_range(Params::TRIPPY_PADDLE_MIN..=Params::TRIPPY_PADDLE_MAX);
            for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
                paddle.height = height;
                paddle.y = self.config.clamp_paddle_y(paddle.y, height);
            }
        }

        let ball = Ball::serve(
            &self.config,
            &self.mode_params,
            self.effects.rolled_radius,
            &mut self.rng,
        );
        self.world.spawn((ball,));
    }

    fn freeze_balls(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.vel = glam::Vec2::ZERO;
        }
    }

    fn despawn_all<C: hecs::Component>(&mut self) {
        let entities: Vec<hecs::Entity> = self
            .world
            .query::<&C>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
    }
}

/// Read-only state for the render pass
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub mode: Mode,
    pub phase: Phase,
    pub score: Score,
    /// Player paddle first, then the opponent
    pub paddles: Vec<Paddle>,
    pub balls: Vec<Ball>,
    pub particles: Vec<Particle>,
    pub trail: Vec<TrailPoint>,
}
