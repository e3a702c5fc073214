use anyhow::Result;
use shell::audio::AudioSink;
use shell::leaderboard::Leaderboard;
use shell::scheduler::{run_ticks, FollowBall};
use sim_core::{GameEvent, Mode, Phase, Session};
use tracing::info;

const MAX_DEMO_TICKS: u32 = 200_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut leaderboard = Leaderboard::load("leaderboard.json")?;
    let audio = AudioSink;

    let mut session = Session::with_mode(Mode::Medium, seed);
    audio.notify_mode_change(session.mode);
    session.start();

    info!(mode = session.mode.name(), seed, "starting headless game");

    let events = run_ticks(&mut session, &mut FollowBall, MAX_DEMO_TICKS);
    report_events(&events, &audio, &mut leaderboard)?;

    // A player win suspends the scheduler on the name prompt; answer it
    // here, the way a UI dialog would.
    if session.phase == Phase::AwaitingName {
        session.submit_name("PLAYER");
        report_events(&session.drain_events(), &audio, &mut leaderboard)?;
    }

    let score = session.score;
    println!(
        "final: {:?}  {} - {} ({})",
        session.phase,
        score.player,
        score.opponent,
        session.mode.name()
    );
    for (i, entry) in leaderboard.entries().iter().enumerate() {
        println!("{:>2}. {:<12} {:>5}  {}", i + 1, entry.name, entry.score, entry.mode);
    }

    Ok(())
}

fn report_events(
    events: &[GameEvent],
    audio: &AudioSink,
    leaderboard: &mut Leaderboard,
) -> Result<()> {
    for event in events {
        match event {
            GameEvent::ModeChanged(mode) => audio.notify_mode_change(*mode),
            GameEvent::PointScored { side, score } => {
                info!(?side, player = score.player, opponent = score.opponent, "point");
            }
            GameEvent::GameEnded { result, score } => {
                info!(?result, player = score.player, opponent = score.opponent, "game over");
            }
            GameEvent::ResultRecorded { name, score, mode } => {
                leaderboard.submit(name, *score, *mode)?;
            }
        }
    }
    Ok(())
}
