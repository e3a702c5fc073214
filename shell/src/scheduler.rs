//! Explicit fixed-tick driver. The browser's animation callback becomes a
//! plain loop so the simulation can be run deterministically, headless.

use sim_core::{GameEvent, InputState, Phase, Session, Snapshot};

/// Supplies the player's per-tick input
pub trait InputSource {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState;
}

/// Scripted player that chases the ball, dead-zone included
#[derive(Debug, Default)]
pub struct FollowBall;

impl InputSource for FollowBall {
    fn poll(&mut self, snapshot: &Snapshot) -> InputState {
        let (Some(paddle), Some(ball)) = (snapshot.paddles.first(), snapshot.balls.first())
        else {
            return InputState::new();
        };
        let center = paddle.y + paddle.height / 2.0;
        InputState {
            move_up: ball.pos.y < center - 5.0,
            move_down: ball.pos.y > center + 5.0,
        }
    }
}

/// Player that never reacts
#[derive(Debug, Default)]
pub struct Idle;

impl InputSource for Idle {
    fn poll(&mut self, _snapshot: &Snapshot) -> InputState {
        InputState::new()
    }
}

/// Run up to `max_ticks`, collecting events. Stops early when the session
/// leaves the tickable phases: the winner-name prompt suspends the
/// scheduler entirely, and a finished game has nothing left to drive.
pub fn run_ticks(
    session: &mut Session,
    source: &mut dyn InputSource,
    max_ticks: u32,
) -> Vec<GameEvent> {
    let mut collected = Vec::new();
    for _ in 0..max_ticks {
        match session.phase {
            Phase::Playing | Phase::PointPause { .. } => {
                let input = source.poll(&session.snapshot());
                session.tick(input);
                collected.extend(session.drain_events());
            }
            Phase::NotStarted | Phase::AwaitingName | Phase::GameOver { .. } => break,
        }
    }
    collected
}
