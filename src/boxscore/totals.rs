// src/boxscore/totals.rs

use serde::Serialize;
use tracing::warn;

use crate::table::{Cell, StatTable};

/// Column whose values are innings in `whole.thirds` notation.
const INNINGS_PITCHED: &str = "IP";

/// A scraped totals cell that disagrees with the sum of the player rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsMismatch {
    pub column: String,
    pub scraped: String,
    pub computed: String,
}

/// Compare the scraped totals row against column sums.
///
/// Only integer columns (and `IP`, summed in outs) are checked; columns named
/// in `skip` are left alone. The table is not modified.
pub fn validate_totals(table: &StatTable, table_name: &str, skip: &[&str]) -> Vec<TotalsMismatch> {
    let Some(totals) = table.totals() else {
        return Vec::new();
    };
    let players = table.player_rows();
    let mut out = Vec::new();

    for (col, name) in table.columns.iter().enumerate() {
        if skip.contains(&name.as_str()) {
            continue;
        }
        let cells = players.iter().map(|r| r.get(col).unwrap_or(&Cell::Empty));
        let Some(scraped) = totals.get(col) else {
            continue;
        };

        let mismatch = if name == INNINGS_PITCHED {
            let summed = checked_sum(cells.map(outs));
            match (outs(scraped), summed) {
                (Some(s), Some(c)) if s != c => Some((format_ip(s), format_ip(c))),
                _ => None,
            }
        } else {
            let summed = checked_sum(cells.map(count));
            match (count(scraped), summed) {
                (Some(s), Some(c)) if s != c => Some((s.to_string(), c.to_string())),
                _ => None,
            }
        };

        if let Some((scraped, computed)) = mismatch {
            warn!(table = table_name, column = %name, %scraped, %computed, "totals row disagrees with player rows");
            out.push(TotalsMismatch {
                column: name.clone(),
                scraped,
                computed,
            });
        }
    }

    out
}

/// `None` when any value is missing or the sum overflows; the column is
/// then left unchecked.
fn checked_sum<I: Iterator<Item = Option<i64>>>(values: I) -> Option<i64> {
    values.fold(Some(0i64), |acc, v| acc?.checked_add(v?))
}

/// Integer value of a counting cell; blanks count as zero.
fn count(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(v) => Some(*v),
        Cell::Empty => Some(0),
        _ => None,
    }
}

/// `6.1` → 19 outs. Blank counts as zero.
fn outs(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Empty => Some(0),
        Cell::Int(v) => v.checked_mul(3),
        Cell::Float(v) if *v >= 0.0 && *v < i64::MAX as f64 => {
            let whole = v.trunc();
            let thirds = ((v - whole) * 10.0).round() as i64;
            if !(0..3).contains(&thirds) {
                return None;
            }
            (whole as i64).checked_mul(3)?.checked_add(thirds)
        }
        _ => None,
    }
}

fn format_ip(outs: i64) -> String {
    format!("{}.{}", outs / 3, outs % 3)
}
