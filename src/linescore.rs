// src/linescore.rs

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::CleanError;
use crate::side::HomeAway;
use crate::table::{clean_str, parse_int, RawGrid};

const LABELS: [&str; 3] = ["teams", "gamers", "results"];
const TOTALS: [&str; 3] = ["R", "H", "E"];

/// One side's row of the linescore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineScoreSide {
    pub gamer: String,
    pub team: String,
    pub result: String,
    /// Runs per inning; `None` for unplayed or marked (`X`, `-`) innings.
    pub innings: Vec<Option<i64>>,
    pub runs: i64,
    pub hits: i64,
    pub errors: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineScore {
    /// Header after cleaning: `gamers`, `teams`, `results`, innings, `R`, `H`, `E`.
    pub columns: Vec<String>,
    /// Inning labels, in page order.
    pub inning_labels: Vec<String>,
    #[serde(flatten)]
    pub sides: HomeAway<LineScoreSide>,
}

/// Reshape the combined linescore grid into exactly an away row and a home row.
///
/// Row 0 of the grid is the real header; its first three cells are blank on the
/// page and become `teams`, `gamers`, `results`.
#[instrument(level = "debug", skip(grid), fields(rows = grid.rows.len()))]
pub fn clean_linescore(grid: &RawGrid, table: &str) -> Result<LineScore, CleanError> {
    let mut grid = grid.clone();

    // 1) leading index column
    grid.drop_column(0);

    // 2) promote row 0 to the header
    if grid.rows.is_empty() {
        return Err(CleanError::empty_table(table));
    }
    let mut header: Vec<String> = grid.rows.remove(0).iter().map(|c| clean_str(c).to_string()).collect();
    if header.len() < LABELS.len() {
        return Err(CleanError::missing_column(table, LABELS[header.len()]));
    }
    for (cell, label) in header.iter_mut().zip(LABELS) {
        *cell = label.to_string();
    }

    // 3) exactly two sides
    if grid.rows.len() != 2 {
        return Err(CleanError::RowCount {
            table: table.to_string(),
            expected: 2,
            found: grid.rows.len(),
        });
    }

    let position = |name: &str| {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| CleanError::missing_column(table, name))
    };
    let [r, h, e] = [position(TOTALS[0])?, position(TOTALS[1])?, position(TOTALS[2])?];
    let inning_cols: Vec<usize> = (LABELS.len()..header.len())
        .filter(|i| ![r, h, e].contains(i))
        .collect();

    // 4) typed rows
    let mut sides = Vec::with_capacity(2);
    for (row_idx, row) in grid.rows.iter().enumerate() {
        let cell = |i: usize| row.get(i).map(|c| clean_str(c)).unwrap_or("");
        let number = |i: usize| {
            parse_int(cell(i)).ok_or_else(|| CleanError::NotNumeric {
                table: table.to_string(),
                column: header[i].clone(),
                row: row_idx,
                value: cell(i).to_string(),
            })
        };
        sides.push(LineScoreSide {
            team: cell(0).to_string(),
            gamer: cell(1).to_string(),
            result: cell(2).to_string(),
            innings: inning_cols.iter().map(|&i| parse_int(cell(i))).collect(),
            runs: number(r)?,
            hits: number(h)?,
            errors: number(e)?,
        });
    }
    let home = sides.pop().ok_or_else(|| CleanError::empty_table(table))?;
    let away = sides.pop().ok_or_else(|| CleanError::empty_table(table))?;

    // 5) gamers first
    let inning_labels: Vec<String> = inning_cols.iter().map(|&i| header[i].clone()).collect();
    let mut columns = vec![LABELS[1].to_string(), LABELS[0].to_string(), LABELS[2].to_string()];
    columns.extend(
        (LABELS.len()..header.len()).map(|i| header[i].clone()),
    );
    debug!(innings = inning_labels.len(), "cleaned linescore");

    Ok(LineScore {
        columns,
        inning_labels,
        sides: HomeAway::new(away, home),
    })
}
