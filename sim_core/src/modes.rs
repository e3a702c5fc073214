use crate::params::Params;

/// Named gameplay variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Easy,
    Medium,
    Hard,
    Insane,
    UltraInsane,
    Insaniest,
    BigBall,
    Trippy,
    Gravity,
    Art,
    Infinite,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Medium
    }
}

impl Mode {
    pub const ALL: [Mode; 11] = [
        Mode::Easy,
        Mode::Medium,
        Mode::Hard,
        Mode::Insane,
        Mode::UltraInsane,
        Mode::Insaniest,
        Mode::BigBall,
        Mode::Trippy,
        Mode::Gravity,
        Mode::Art,
        Mode::Infinite,
    ];

    /// Look up a mode by its external identifier. Unknown names are rejected.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "Easy" => Some(Mode::Easy),
            "Medium" => Some(Mode::Medium),
            "Hard" => Some(Mode::Hard),
            "Insane" => Some(Mode::Insane),
            "UltraInsane" => Some(Mode::UltraInsane),
            "Insaniest" => Some(Mode::Insaniest),
            "BigBall" => Some(Mode::BigBall),
            "Trippy" => Some(Mode::Trippy),
            "Gravity" => Some(Mode::Gravity),
            "Art" => Some(Mode::Art),
            "Infinite" => Some(Mode::Infinite),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Easy => "Easy",
            Mode::Medium => "Medium",
            Mode::Hard => "Hard",
            Mode::Insane => "Insane",
            Mode::UltraInsane => "UltraInsane",
            Mode::Insaniest => "Insaniest",
            Mode::BigBall => "BigBall",
            Mode::Trippy => "Trippy",
            Mode::Gravity => "Gravity",
            Mode::Art => "Art",
            Mode::Infinite => "Infinite",
        }
    }

    pub fn params(&self) -> ModeParams {
        match self {
            Mode::Easy => ModeParams::baseline(0.4, 0.72),
            Mode::Medium => ModeParams::baseline(0.6, 0.9),
            Mode::Hard => ModeParams::baseline(0.8, 1.17),
            Mode::Insane => ModeParams::baseline(1.2, 1.7),
            Mode::UltraInsane => ModeParams {
                contact_boost: 1.2,
                ..ModeParams::baseline(2.0, 3.0)
            },
            Mode::Insaniest => ModeParams {
                contact_boost: 1.3,
                random_paddle_height: true,
                ..ModeParams::baseline(3.0, 4.5)
            },
            Mode::BigBall => ModeParams {
                big_ball: true,
                ..ModeParams::baseline(0.6, 1.0)
            },
            Mode::Trippy => ModeParams {
                resample: true,
                random_paddle_height: true,
                ..ModeParams::baseline(0.6, 0.9)
            },
            Mode::Gravity => ModeParams {
                gravity: 0.3,
                ..ModeParams::baseline(1.0, 1.0)
            },
            Mode::Art => ModeParams {
                trail: true,
                ..ModeParams::baseline(0.6, 1.0)
            },
            Mode::Infinite => ModeParams {
                multi_ball: true,
                win_score: Params::WIN_SCORE_INFINITE,
                ..ModeParams::baseline(0.6, 0.9)
            },
        }
    }
}

/// Physics/behavior parameters for one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    /// Fraction of paddle speed the AI moves at
    pub ai_gain: f32,
    /// Applied to the serve velocity
    pub speed_mult: f32,
    /// Downward acceleration per tick (0 in all but Gravity)
    pub gravity: f32,
    /// Velocity multiplier applied on every paddle contact
    pub contact_boost: f32,
    pub win_score: u32,
    pub big_ball: bool,
    pub multi_ball: bool,
    pub random_paddle_height: bool,
    /// Trippy's timed paddle/ball re-randomization
    pub resample: bool,
    /// Art's persistent position trail
    pub trail: bool,
}

impl ModeParams {
    fn baseline(ai_gain: f32, speed_mult: f32) -> Self {
        Self {
            ai_gain,
            speed_mult,
            gravity: 0.0,
            contact_boost: 1.0,
            win_score: Params::WIN_SCORE,
            big_ball: false,
            multi_ball: false,
            random_paddle_height: false,
            resample: false,
            trail: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trips() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(Mode::from_name("Nightmare"), None);
        assert_eq!(Mode::from_name(""), None);
        assert_eq!(Mode::from_name("easy"), None, "lookup is case-sensitive");
    }

    #[test]
    fn test_param_table() {
        let easy = Mode::Easy.params();
        assert_eq!(easy.ai_gain, 0.4);
        assert_eq!(easy.speed_mult, 0.72);
        assert_eq!(easy.contact_boost, 1.0);

        let ultra = Mode::UltraInsane.params();
        assert_eq!(ultra.contact_boost, 1.2);

        let gravity = Mode::Gravity.params();
        assert_eq!(gravity.gravity, 0.3);

        let infinite = Mode::Infinite.params();
        assert!(infinite.multi_ball);
        assert_eq!(infinite.win_score, 5000);

        for mode in Mode::ALL {
            let p = mode.params();
            assert!(p.ai_gain > 0.0);
            assert!(p.speed_mult > 0.0);
            assert!(p.gravity >= 0.0);
        }
    }
}
