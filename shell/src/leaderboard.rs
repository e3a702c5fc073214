use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sim_core::Mode;
use tracing::debug;

pub const MAX_ENTRIES: usize = 10;

/// One recorded win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u32,
    pub mode: String,
    /// Unix seconds
    pub date: u64,
}

/// Top-10 score list, ordered by score descending, persisted as JSON
#[derive(Debug)]
pub struct Leaderboard {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Load from disk; a missing file is an empty board
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("corrupt leaderboard at {}", path.display()))?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading leaderboard at {}", path.display()))
            }
        };
        Ok(Self { path, entries })
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Record a win and persist. Empty names are acknowledged but skipped.
    pub fn submit(&mut self, name: &str, score: u32, mode: Mode) -> Result<()> {
        let date = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.submit_at(name, score, mode, date)
    }

    pub fn submit_at(&mut self, name: &str, score: u32, mode: Mode, date: u64) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            debug!("empty name, result not recorded");
            return Ok(());
        }

        self.entries.push(ScoreEntry {
            name: name.to_string(),
            score,
            mode: mode.name().to_string(),
            date,
        });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing leaderboard at {}", self.path.display()))
    }
}
