use glam::Vec2;
use sim_core::*;

fn set_ball(session: &mut Session, pos: Vec2, vel: Vec2) {
    for (_entity, ball) in session.world.query_mut::<&mut Ball>() {
        ball.pos = pos;
        ball.vel = vel;
    }
}

fn balls(session: &Session) -> Vec<Ball> {
    session
        .world
        .query::<&Ball>()
        .iter()
        .map(|(_e, b)| *b)
        .collect()
}

fn follow_ball_input(session: &Session) -> InputState {
    let snapshot = session.snapshot();
    let (Some(paddle), Some(ball)) = (snapshot.paddles.first(), snapshot.balls.first()) else {
        return InputState::new();
    };
    let center = paddle.y + paddle.height / 2.0;
    InputState {
        move_up: ball.pos.y < center - 5.0,
        move_down: ball.pos.y > center + 5.0,
    }
}

#[test]
fn test_paddles_stay_in_bounds_under_constant_input() {
    for mode in [Mode::Medium, Mode::Insane, Mode::Gravity] {
        let mut session = Session::with_mode(mode, 3);
        session.start();
        let held_down = InputState {
            move_up: false,
            move_down: true,
        };

        for tick in 0..600 {
            session.tick(held_down);
            for paddle in session.snapshot().paddles {
                assert!(
                    paddle.y >= 0.0 && paddle.y <= session.config.arena_height - paddle.height,
                    "paddle out of bounds at tick {} in {:?}: y={}",
                    tick,
                    mode,
                    paddle.y
                );
            }
        }
    }
}

#[test]
fn test_balls_are_corrected_by_end_of_tick() {
    for mode in [Mode::Medium, Mode::UltraInsane, Mode::BigBall, Mode::Gravity] {
        let mut session = Session::with_mode(mode, 11);
        session.start();

        for tick in 0..2000 {
            let input = follow_ball_input(&session);
            session.tick(input);
            let config = session.config.clone();
            for ball in balls(&session) {
                let r = ball.radius;
                assert!(
                    ball.pos.y >= r - 1e-3 && ball.pos.y <= config.arena_height - r + 1e-3,
                    "ball y uncorrected at tick {} in {:?}: {}",
                    tick,
                    mode,
                    ball.pos.y
                );
                assert!(
                    ball.pos.x >= r - 1e-3 && ball.pos.x <= config.arena_width - r + 1e-3,
                    "ball x uncorrected at tick {} in {:?}: {}",
                    tick,
                    mode,
                    ball.pos.x
                );
            }
        }
    }
}

#[test]
fn test_scoring_law_left_exit() {
    let mut session = Session::new(5);
    session.start();
    set_ball(&mut session, Vec2::new(4.0, 350.0), Vec2::new(-7.0, 0.0));

    session.tick(InputState::new());

    assert_eq!(session.score.opponent, 1, "one exit, one point");
    assert_eq!(session.score.player, 0);
    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::PointScored {
            side: Side::Opponent,
            ..
        }
    )));
}

#[test]
fn test_point_pause_beat_then_resume() {
    let mut session = Session::new(5);
    session.start();
    set_ball(&mut session, Vec2::new(4.0, 350.0), Vec2::new(-7.0, 0.0));

    session.tick(InputState::new());
    assert!(matches!(session.phase, Phase::PointPause { .. }));
    let served = balls(&session)[0];
    assert_eq!(served.pos, Vec2::new(400.0, 200.0), "held at center");

    // Pause ticks leave the ball untouched, then play resumes
    for _ in 0..45 {
        session.tick(InputState::new());
        assert_eq!(balls(&session)[0].pos, served.pos);
    }
    assert_eq!(session.phase, Phase::Playing);
    session.tick(InputState::new());
    assert_ne!(balls(&session)[0].pos, served.pos, "ball moving again");
}

#[test]
fn test_player_win_ends_game_and_freezes() {
    let mut session = Session::new(5);
    session.start();
    session.score = Score {
        player: 4,
        opponent: 2,
    };
    // Aim past the right wall, far from the AI paddle's span
    set_ball(&mut session, Vec2::new(795.0, 40.0), Vec2::new(9.0, 0.0));

    session.tick(InputState::new());

    assert_eq!(session.score.player, 5);
    assert_eq!(session.phase, Phase::AwaitingName);
    for ball in balls(&session) {
        assert_eq!(ball.vel, Vec2::ZERO, "velocities frozen at game end");
    }
    let events = session.drain_events();
    assert!(events.contains(&GameEvent::GameEnded {
        result: GameResult::Win,
        score: Score {
            player: 5,
            opponent: 2
        },
    }));

    // No further score changes until an explicit reset
    for _ in 0..50 {
        session.tick(InputState::new());
    }
    assert_eq!(session.score.player, 5);
    assert_eq!(session.score.opponent, 2);

    session.submit_name("ada");
    assert_eq!(
        session.phase,
        Phase::GameOver {
            result: GameResult::Win
        }
    );
}

#[test]
fn test_opponent_win_is_a_loss() {
    let mut session = Session::new(5);
    session.start();
    session.score = Score {
        player: 1,
        opponent: 4,
    };
    set_ball(&mut session, Vec2::new(5.0, 40.0), Vec2::new(-9.0, 0.0));

    session.tick(InputState::new());

    assert_eq!(
        session.phase,
        Phase::GameOver {
            result: GameResult::Lose
        }
    );
    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::GameEnded {
            result: GameResult::Lose,
            ..
        }
    )));
}

#[test]
fn test_infinite_growth_law_through_session() {
    let mut session = Session::with_mode(Mode::Infinite, 5);
    session.start();
    // Park the ball in contact with the player paddle (paddle spans 160..240)
    set_ball(&mut session, Vec2::new(15.0, 200.0), Vec2::new(-4.0, 0.0));

    session.tick(InputState::new());
    assert_eq!(balls(&session).len(), 2, "one contact doubles the set");

    // A long run keeps doubling but never loses the set entirely
    for _ in 0..500 {
        session.tick(InputState::new());
        assert!(!balls(&session).is_empty());
    }
    assert!(session.phase.is_playing(), "threshold 5000 is far away");
}

#[test]
fn test_mode_switch_is_a_pure_reset() {
    // Switching to Medium from Medium and from Hard must observe the same
    // reset: zeroed score, Playing, one centered ball.
    let mut from_same = Session::with_mode(Mode::Medium, 5);
    from_same.start();
    from_same.score = Score {
        player: 3,
        opponent: 2,
    };
    from_same.select_mode("Medium");

    let mut from_other = Session::with_mode(Mode::Hard, 5);
    from_other.start();
    from_other.score = Score {
        player: 1,
        opponent: 4,
    };
    from_other.select_mode("Medium");

    for session in [&from_same, &from_other] {
        assert_eq!(session.mode, Mode::Medium);
        assert_eq!(session.score, Score::new());
        assert_eq!(session.phase, Phase::Playing);
        let balls = balls(session);
        assert_eq!(balls.len(), 1);
        assert_eq!(balls[0].pos, Vec2::new(400.0, 200.0));
    }
}

#[test]
fn test_art_trail_survives_points_but_not_mode_switch() {
    let mut session = Session::with_mode(Mode::Art, 5);
    session.start();
    for _ in 0..20 {
        session.tick(InputState::new());
    }
    let len_before = session.snapshot().trail.len();
    assert!(len_before > 0);

    // Score a point; the trail must survive the reset
    set_ball(&mut session, Vec2::new(4.0, 350.0), Vec2::new(-7.0, 0.0));
    session.tick(InputState::new());
    assert!(session.snapshot().trail.len() >= len_before);

    session.select_mode("Art");
    assert!(session.snapshot().trail.is_empty(), "mode switch clears it");
}

#[test]
fn test_full_game_runs_to_completion() {
    let mut session = Session::new(99);
    session.start();

    // Park the player paddle at the top; the AI wins every rally it serves
    // into the open court, so the game must terminate.
    let held_up = InputState {
        move_up: true,
        move_down: false,
    };

    let mut safety = 0;
    while matches!(session.phase, Phase::Playing | Phase::PointPause { .. }) {
        session.tick(held_up);
        safety += 1;
        assert!(safety < 200_000, "game never terminated");
    }

    assert_eq!(
        session.phase,
        Phase::GameOver {
            result: GameResult::Lose
        }
    );
    assert_eq!(session.score.opponent, 5);
    assert!(session.score.player < 5);
}
