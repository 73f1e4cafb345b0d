// src/boxscore/pitching.rs

use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

use super::decision::Decision;
use super::totals::{validate_totals, TotalsMismatch};
use crate::config::TableLayout;
use crate::error::CleanError;
use crate::names::{normalize_names, strip_periods, NameMap};
use crate::patterns::PATTERNS;
use crate::table::{RawGrid, StatTable};

/// A pitcher name the page cut short.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Abbreviation {
    /// Name as displayed, ellipsis included.
    pub truncated: String,
    /// The part before the ellipsis with periods removed, exactly as it
    /// appears in the index.
    pub prefix: String,
}

/// One side's pitching lines, indexed by cleaned pitcher name, with one
/// indicator column per [`Decision`] appended in [`Decision::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchingBoxscore {
    pub table: StatTable,
    /// Truncated names for the caller to resolve against a full-name source.
    pub abbreviated: Vec<Abbreviation>,
    pub renamed: NameMap,
    pub totals_check: Vec<TotalsMismatch>,
}

/// Decision codes attached to a pitcher cell, in display order.
pub fn decision_codes(cell: &str) -> Vec<&str> {
    PATTERNS
        .pitcher_decision
        .captures_iter(cell)
        .filter_map(|c| c.name("decision"))
        .map(|m| m.as_str())
        .collect()
}

#[instrument(level = "debug", skip(grid, layout), fields(rows = grid.rows.len()))]
pub fn clean_pitching(
    grid: &RawGrid,
    layout: &TableLayout,
    table: &str,
) -> Result<PitchingBoxscore, CleanError> {
    if grid.rows.is_empty() {
        return Err(CleanError::empty_table(table));
    }
    let mut grid = grid.clone();

    // 1) derived ERA column
    let era = grid.require_column(table, &layout.derived_column)?;
    grid.drop_column(era);

    let name_col = grid.require_column(table, &layout.name_column)?;
    let mut names = grid.take_column(name_col);
    let totals_label = names.pop().unwrap_or_default();

    // 2) decision annotations → per-row indicators
    let mut observed = BTreeSet::new();
    let mut indicators = vec![[0i64; Decision::ALL.len()]; names.len()];
    for (row, name) in indicators.iter_mut().zip(&names) {
        for code in decision_codes(name) {
            match Decision::from_code(code) {
                Some(decision) => {
                    observed.insert(decision);
                    row[decision.slot()] += 1;
                }
                None => warn!(table, pitcher = %name, code, "unknown decision code dropped"),
            }
        }
    }

    // 3) zero-fill + fixed order
    let filled: Vec<&str> = Decision::ALL
        .iter()
        .filter(|d| !observed.contains(*d))
        .map(|d| d.code())
        .collect();
    debug!(?observed, zero_filled = ?filled, "decision columns");

    // 4) totals row for the indicator columns only
    let sums = indicators.iter().fold([0i64; Decision::ALL.len()], |mut acc, row| {
        for (a, v) in acc.iter_mut().zip(row) {
            *a += v;
        }
        acc
    });

    // 5) annotation text out of the names
    let stripped: Vec<String> = names
        .iter()
        .map(|n| PATTERNS.pitcher_decision.replace_all(n, "").trim().to_string())
        .collect();

    // 6) report truncated names before the ellipsis goes
    let abbreviated: Vec<Abbreviation> = stripped
        .iter()
        .filter_map(|n| {
            let caps = PATTERNS.pitcher_truncation.captures(n)?;
            Some(Abbreviation {
                truncated: n.clone(),
                prefix: strip_periods(caps["name"].trim()),
            })
        })
        .collect();

    // 7) ellipsis removal + abbreviation periods
    let unellipsed: Vec<String> = stripped
        .iter()
        .map(|n| PATTERNS.ellipsis.replace_all(n, "").trim().to_string())
        .collect();
    let (mut index, renamed) = normalize_names(&unellipsed);
    index.push(totals_label);

    // 8) typed table, indicators appended after the scraped columns
    let mut table_out = StatTable::from_grid(grid, index);
    let totals_check = validate_totals(&table_out, table, &[]);
    for decision in Decision::ALL {
        let mut column: Vec<i64> = indicators.iter().map(|r| r[decision.slot()]).collect();
        column.push(sums[decision.slot()]);
        table_out.push_int_column(decision.code(), &column);
    }

    Ok(PitchingBoxscore {
        table: table_out,
        abbreviated,
        renamed,
        totals_check,
    })
}

/// Replace truncated index entries with the one full name in `full_names`
/// that starts with the truncated prefix. Names are compared with periods
/// removed, and the replacement is written in that same form so it lines up
/// with the rest of the index. Ambiguous or unmatched prefixes are left as
/// they are. Returns how many entries were replaced.
pub fn reconcile_abbreviations<S: AsRef<str>>(boxscore: &mut PitchingBoxscore, full_names: &[S]) -> usize {
    let mut replaced = 0;
    for abbr in &boxscore.abbreviated {
        let mut candidates = full_names
            .iter()
            .map(|n| strip_periods(n.as_ref().trim()))
            .filter(|n| n.starts_with(abbr.prefix.as_str()));
        let (Some(full), None) = (candidates.next(), candidates.next()) else {
            debug!(prefix = %abbr.prefix, "no unique full name for abbreviation");
            continue;
        };
        let players = boxscore.table.index.len().saturating_sub(1);
        if let Some(slot) = boxscore.table.index[..players]
            .iter_mut()
            .find(|label| **label == abbr.prefix)
        {
            *slot = full;
            replaced += 1;
        }
    }
    replaced
}
