// src/game.rs

//! Per-game aggregation: runs every cleaner over one game's scraped inputs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::boxscore::{clean_batting, clean_pitching, BattingBoxscore, PitchingBoxscore};
use crate::config::ParseConfig;
use crate::linescore::{clean_linescore, LineScore};
use crate::log::GameLog;
use crate::side::HomeAway;
use crate::table::RawGrid;

/// Already-fetched material for one game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInputs {
    pub id: String,
    /// Game log narrative, markup included.
    pub log: String,
    pub batting: HomeAway<RawGrid>,
    pub pitching: HomeAway<RawGrid>,
    pub linescore: RawGrid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub id: String,
    pub log: GameLog,
    pub batting: HomeAway<BattingBoxscore>,
    pub pitching: HomeAway<PitchingBoxscore>,
    pub linescore: LineScore,
}

/// Clean everything for one game.
///
/// The game log never fails; a schema problem in any table fails the game,
/// with the table named in the error chain.
#[instrument(level = "info", skip_all, fields(game = %inputs.id))]
pub fn parse_game(inputs: &GameInputs, config: &ParseConfig) -> Result<GameReport> {
    let log = GameLog::parse(&inputs.log, config);
    if !log.issues.is_empty() {
        warn!(issues = log.issues.len(), "game log had out-of-order lines");
    }

    let batting = HomeAway {
        away: clean_batting(&inputs.batting.away, &config.batting, "batting (away)"),
        home: clean_batting(&inputs.batting.home, &config.batting, "batting (home)"),
    }
    .transpose()
    .with_context(|| format!("cleaning batting boxscore for game {}", inputs.id))?;

    let pitching = HomeAway {
        away: clean_pitching(&inputs.pitching.away, &config.pitching, "pitching (away)"),
        home: clean_pitching(&inputs.pitching.home, &config.pitching, "pitching (home)"),
    }
    .transpose()
    .with_context(|| format!("cleaning pitching boxscore for game {}", inputs.id))?;

    let linescore = clean_linescore(&inputs.linescore, "linescore")
        .with_context(|| format!("cleaning linescore for game {}", inputs.id))?;

    info!(
        innings = log.innings.len(),
        difficulty = ?log.difficulty,
        "parsed game"
    );
    Ok(GameReport {
        id: inputs.id.clone(),
        log,
        batting,
        pitching,
        linescore,
    })
}

/// Outcome of a batch: every game that parsed, plus `(game id, error)` for
/// every game that did not.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<GameReport>,
    pub failures: Vec<(String, anyhow::Error)>,
}

/// Parse games one after another; a failing game never stops the batch.
pub fn process_games<I>(games: I, config: &ParseConfig) -> BatchOutcome
where
    I: IntoIterator<Item = GameInputs>,
{
    let mut outcome = BatchOutcome::default();
    for game in games {
        match parse_game(&game, config) {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                error!(game = %game.id, "game skipped: {:#}", e);
                outcome.failures.push((game.id, e));
            }
        }
    }
    info!(
        parsed = outcome.reports.len(),
        failed = outcome.failures.len(),
        "batch complete"
    );
    outcome
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    pub(crate) fn game(id: &str) -> GameInputs {
        let batting = |lead: &str| {
            RawGrid::new(
                ["Player", "AB", "R", "H", "AVG"],
                vec![
                    row(&[lead, "4", "1", "2", ".300"]),
                    row(&["a-Doe Jr., PH", "1", "0", "0", ".111"]),
                    row(&["Totals", "5", "1", "2", ""]),
                ],
            )
        };
        let pitching = |starter: &str| {
            RawGrid::new(
                ["Pitcher", "IP", "H", "ER", "ERA"],
                vec![
                    row(&[starter, "8.0", "6", "2", "3.10"]),
                    row(&["Closer (S, 4)", "1.0", "0", "0", "1.50"]),
                    row(&["Totals", "9.0", "6", "2", ""]),
                ],
            )
        };
        let headers: Vec<String> = (0..7).map(|i| i.to_string()).collect();
        let linescore = RawGrid::new(
            headers,
            vec![
                row(&["0", "", "", "", "R", "H", "E"]),
                row(&["1", "NYY", "gamer_one", "W", "3", "8", "0"]),
                row(&["2", "BOS", "gamer_two", "L", "2", "6", "1"]),
            ],
        );

        GameInputs {
            id: id.to_string(),
            log: "Inning 1:<br>NYY batting.<br>Runs: 1 Hits: 1 Walks: 0 Errors: 0 Pitches: 9<br>Game Log Legend<br>Hitting Difficulty is Veteran".to_string(),
            batting: HomeAway::new(batting("Judge, RF"), batting("Devers, 3B")),
            pitching: HomeAway::new(pitching("Cole (W, 10-2)"), pitching("Sale... (L, 3-4)")),
            linescore,
        }
    }
}
