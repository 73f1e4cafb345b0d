// src/boxscore/batting.rs

use serde::Serialize;
use tracing::{debug, instrument};

use super::totals::{validate_totals, TotalsMismatch};
use crate::config::TableLayout;
use crate::error::CleanError;
use crate::names::{normalize_names, NameMap};
use crate::patterns::PATTERNS;
use crate::table::{RawGrid, StatTable};

/// One side's batting lines, indexed by cleaned player name. The last row is
/// the scraped totals row, carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingBoxscore {
    pub table: StatTable,
    /// Names whose spelling changed during cleaning.
    pub renamed: NameMap,
    pub totals_check: Vec<TotalsMismatch>,
}

/// Strip the substitution prefix and position suffix from a batter cell.
pub fn batter_name(cell: &str) -> String {
    let cell = cell.trim();
    PATTERNS
        .batter_name
        .captures(cell)
        .and_then(|c| c.name("name"))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| cell.to_string())
}

#[instrument(level = "debug", skip(grid, layout), fields(rows = grid.rows.len()))]
pub fn clean_batting(
    grid: &RawGrid,
    layout: &TableLayout,
    table: &str,
) -> Result<BattingBoxscore, CleanError> {
    if grid.rows.is_empty() {
        return Err(CleanError::empty_table(table));
    }
    let mut grid = grid.clone();

    // 1) derived average column
    let avg = grid.require_column(table, &layout.derived_column)?;
    grid.drop_column(avg);

    // 2) names, leaving the totals label alone
    let name_col = grid.require_column(table, &layout.name_column)?;
    let mut names = grid.take_column(name_col);
    let totals_label = names.pop().unwrap_or_default();
    let extracted: Vec<String> = names.iter().map(|n| batter_name(n)).collect();
    let (mut index, renamed) = normalize_names(&extracted);
    index.push(totals_label);
    debug!(players = index.len() - 1, renamed = renamed.len(), "cleaned batter names");

    // 3) typed, name-indexed table
    let table_out = StatTable::from_grid(grid, index);
    let totals_check = validate_totals(&table_out, table, &[]);

    Ok(BattingBoxscore {
        table: table_out,
        renamed,
        totals_check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParseConfig;
    use crate::table::Cell;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn batting_grid() -> RawGrid {
        RawGrid::new(
            ["Player", "AB", "R", "H", "RBI", "BB", "SO", "AVG"],
            vec![
                row(&["Judge, RF", "4", "1", "2", "3", "0", "1", ".322"]),
                row(&["p-Smith Jr., PH", "1", "0", "0", "0", "0", "1", ".250"]),
                row(&["Volpe, SS", "3", "0", "1", "0", "1", "0", ".240"]),
                row(&["Totals", "8", "1", "3", "3", "1", "2", ""]),
            ],
        )
    }

    #[test]
    fn cleans_names_and_drops_average() {
        let out = clean_batting(&batting_grid(), &ParseConfig::default().batting, "batting away").unwrap();
        let t = &out.table;

        assert_eq!(t.index, vec!["Judge", "Smith Jr", "Volpe", "Totals"]);
        assert_eq!(t.columns, vec!["AB", "R", "H", "RBI", "BB", "SO"]);
        assert_eq!(t.get("Smith Jr", "SO"), Some(&Cell::Int(1)));
        assert_eq!(t.get("Totals", "H"), Some(&Cell::Int(3)));
        assert_eq!(out.renamed.get("Smith Jr."), Some(&"Smith Jr".to_string()));
        assert_eq!(out.renamed.len(), 1);
        assert!(out.totals_check.is_empty());
    }

    #[test]
    fn prefix_then_period_removal() {
        assert_eq!(batter_name("p-Smith Jr."), "Smith Jr.");
        let (names, _) = normalize_names([batter_name("p-Smith Jr.")]);
        assert_eq!(names, vec!["Smith Jr"]);
    }

    #[test]
    fn totals_label_is_never_rewritten() {
        let mut grid = batting_grid();
        grid.rows.last_mut().unwrap()[0] = "a-Totals., all".to_string();
        let out = clean_batting(&grid, &ParseConfig::default().batting, "batting").unwrap();
        assert_eq!(out.table.index.last().map(String::as_str), Some("a-Totals., all"));
    }

    #[test]
    fn scraped_totals_are_checked_not_replaced() {
        let mut grid = batting_grid();
        grid.rows.last_mut().unwrap()[1] = "9".to_string();
        let out = clean_batting(&grid, &ParseConfig::default().batting, "batting").unwrap();
        assert_eq!(out.table.get("Totals", "AB"), Some(&Cell::Int(9)));
        assert_eq!(out.totals_check.len(), 1);
        assert_eq!(out.totals_check[0].column, "AB");
    }

    #[test]
    fn missing_average_column_is_a_schema_error() {
        let mut grid = batting_grid();
        grid.drop_column(7);
        let err = clean_batting(&grid, &ParseConfig::default().batting, "batting home").unwrap_err();
        assert_eq!(err, CleanError::missing_column("batting home", "AVG"));
        assert_eq!(err.to_string(), "batting home: expected column `AVG` is missing");
    }

    #[test]
    fn empty_grid_is_rejected() {
        let grid = RawGrid::new(["Player", "AVG"], Vec::<Vec<String>>::new());
        assert_eq!(
            clean_batting(&grid, &ParseConfig::default().batting, "batting"),
            Err(CleanError::empty_table("batting"))
        );
    }
}
