// src/log/mod.rs

//! Game log narrative → per-inning stat tallies and difficulty.

pub mod difficulty;
pub mod innings;
pub mod normalize;

use serde::Serialize;
use tracing::instrument;

use crate::config::ParseConfig;
use crate::error::LogIssue;

pub use difficulty::extract_difficulty;
pub use innings::{reconstruct, Inning, InningStats, Reconstruction, StatLine, TeamStats};
pub use normalize::{normalize, Segments};

/// Everything pulled out of one game's narrative text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameLog {
    pub innings: InningStats,
    /// Narrative with the canonical stat lines removed.
    pub joined: String,
    pub difficulty: Option<String>,
    /// Lines skipped while rebuilding the innings.
    pub issues: Vec<LogIssue>,
}

impl GameLog {
    /// Never fails: malformed sections degrade to partial results listed in `issues`.
    #[instrument(level = "info", skip_all, fields(raw_len = raw.len()))]
    pub fn parse(raw: &str, config: &ParseConfig) -> Self {
        let Segments { log, misc } = normalize(raw, config);
        let Reconstruction {
            innings,
            joined,
            issues,
        } = reconstruct(&log);

        Self {
            innings,
            joined,
            difficulty: extract_difficulty(&misc),
            issues,
        }
    }
}
