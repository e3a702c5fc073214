use glam::Vec2;

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.opponent >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Outcome of a finished game, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Lose,
}

/// Coarse lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Playing,
    /// Beat between rallies; counts down to an automatic resume
    PointPause {
        ticks_left: u32,
    },
    /// Won game waiting on a leaderboard name; no ticks are processed
    AwaitingName,
    GameOver {
        result: GameResult,
    },
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

/// What happened during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct Events {
    pub player_points: u32,
    pub opponent_points: u32,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Seeded random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// One point of the Art-mode trail
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub hue: f32, // degrees, [0, 360)
}

/// Mutable visual-variant state (Trippy resampling, Art trail)
#[derive(Debug, Clone, Default)]
pub struct Effects {
    /// Ticks until Trippy's next paddle/ball re-roll
    pub resample_timer: u32,
    /// Trippy's current ball radius roll, carried across serves
    pub rolled_radius: Option<f32>,
    pub trail: Vec<TrailPoint>,
    pub hue: f32,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything tied to the current mode
    pub fn clear(&mut self) {
        self.resample_timer = 0;
        self.rolled_radius = None;
        self.trail.clear();
        self.hue = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Opponent);
        assert_eq!(score.player, 2);
        assert_eq!(score.opponent, 1);
    }

    #[test]
    fn test_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.has_winner(5), Some(Side::Opponent));
        assert_eq!(score.has_winner(6), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.player_points = 2;
        events.ball_hit_wall = true;
        events.clear();
        assert_eq!(events.player_points, 0);
        assert!(!events.ball_hit_wall);
    }
}
