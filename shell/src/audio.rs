//! Fire-and-forget audio notifications. Playback lives outside this
//! process; the shell only decides which track a mode maps to.

use sim_core::Mode;
use tracing::info;

pub fn track_for_mode(mode: Mode) -> &'static str {
    match mode {
        Mode::Easy | Mode::Medium | Mode::Hard => "lo-fi-loop",
        Mode::Insane | Mode::UltraInsane | Mode::Insaniest => "breakcore-loop",
        Mode::BigBall => "dub-loop",
        Mode::Trippy => "acid-loop",
        Mode::Gravity => "ambient-loop",
        Mode::Art => "piano-loop",
        Mode::Infinite => "drone-loop",
    }
}

/// Stub sink: logs the track switch and swallows nothing else, since
/// there is nothing here that can fail.
#[derive(Debug, Default)]
pub struct AudioSink;

impl AudioSink {
    pub fn notify_mode_change(&self, mode: Mode) {
        info!(mode = mode.name(), track = track_for_mode(mode), "switching background track");
    }
}
