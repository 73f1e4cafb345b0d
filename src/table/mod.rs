// src/table/mod.rs

//! Raw scraped grids and the typed, name-indexed tables built from them.

pub mod convert;

use serde::{Deserialize, Serialize};

use crate::error::CleanError;

pub use convert::{clean_str, infer_column, parse_int};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGrid {
    /// Column names as the page rendered them.
    pub headers: Vec<String>,
    /// Each table row, one string per column.
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new<H, R>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = Vec<String>>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows.into_iter().collect(),
        }
    }

    /// Position of `column`, or `MissingColumn` naming `table`.
    pub fn require_column(&self, table: &str, column: &str) -> Result<usize, CleanError> {
        self.headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| CleanError::missing_column(table, column))
    }

    /// Remove column `idx` from the header and every row that reaches it.
    pub fn drop_column(&mut self, idx: usize) {
        if idx < self.headers.len() {
            self.headers.remove(idx);
        }
        for row in &mut self.rows {
            if idx < row.len() {
                row.remove(idx);
            }
        }
    }

    /// Take column `idx` out of the grid, returning its cells top to bottom.
    pub fn take_column(&mut self, idx: usize) -> Vec<String> {
        if idx < self.headers.len() {
            self.headers.remove(idx);
        }
        self.rows
            .iter_mut()
            .map(|row| if idx < row.len() { row.remove(idx) } else { String::new() })
            .collect()
    }
}

/// A single typed value in a cleaned table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(v) => Some(*v as f64),
            Cell::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Cleaned table indexed by row label (player name, or the totals label for
/// the last row of a boxscore).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatTable {
    pub index: Vec<String>,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl StatTable {
    /// Type every column of `grid` and label its rows with `index`.
    pub fn from_grid(grid: RawGrid, index: Vec<String>) -> Self {
        let width = grid.headers.len();
        let mut rows: Vec<Vec<Cell>> = vec![Vec::with_capacity(width); grid.rows.len()];

        for col in 0..width {
            let cells: Vec<&str> = grid
                .rows
                .iter()
                .map(|r| r.get(col).map(String::as_str).unwrap_or(""))
                .collect();
            for (row, cell) in rows.iter_mut().zip(infer_column(&cells)) {
                row.push(cell);
            }
        }

        Self {
            index,
            columns: grid.headers,
            rows,
        }
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn row(&self, label: &str) -> Option<&[Cell]> {
        let idx = self.index.iter().position(|l| l == label)?;
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn get(&self, label: &str, column: &str) -> Option<&Cell> {
        let col = self.column(column)?;
        self.row(label)?.get(col)
    }

    /// Every row except the trailing totals row.
    pub fn player_rows(&self) -> &[Vec<Cell>] {
        match self.rows.split_last() {
            Some((_, players)) => players,
            None => &[],
        }
    }

    pub fn totals(&self) -> Option<&[Cell]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Append an integer column; `values` must hold one entry per row.
    pub fn push_int_column(&mut self, name: &str, values: &[i64]) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.to_string());
        for (row, v) in self.rows.iter_mut().zip(values) {
            row.push(Cell::Int(*v));
        }
    }

    /// Integer values of column `col` for every row.
    pub fn int_column(&self, col: usize) -> Vec<Option<i64>> {
        self.rows
            .iter()
            .map(|r| r.get(col).and_then(Cell::as_int))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> RawGrid {
        RawGrid::new(
            ["Player", "AB", "AVG"],
            vec![
                vec!["Judge".to_string(), "4".to_string(), ".301".to_string()],
                vec!["Totals".to_string(), "4".to_string(), "".to_string()],
            ],
        )
    }

    #[test]
    fn require_column_names_the_table() {
        let g = grid();
        assert_eq!(g.require_column("batting", "AB"), Ok(1));
        assert_eq!(
            g.require_column("batting", "ERA"),
            Err(CleanError::missing_column("batting", "ERA"))
        );
    }

    #[test]
    fn drop_and_take_columns() {
        let mut g = grid();
        g.drop_column(2);
        assert_eq!(g.headers, vec!["Player", "AB"]);
        let names = g.take_column(0);
        assert_eq!(names, vec!["Judge", "Totals"]);
        assert_eq!(g.headers, vec!["AB"]);
        assert_eq!(g.rows, vec![vec!["4".to_string()], vec!["4".to_string()]]);
    }

    #[test]
    fn from_grid_types_columns() {
        let mut g = grid();
        let names = g.take_column(0);
        let t = StatTable::from_grid(g, names);

        assert_eq!(t.get("Judge", "AB"), Some(&Cell::Int(4)));
        assert_eq!(t.get("Judge", "AVG"), Some(&Cell::Float(0.301)));
        assert_eq!(t.get("Totals", "AVG"), Some(&Cell::Empty));
        assert_eq!(t.player_rows().len(), 1);
        assert_eq!(t.totals().unwrap()[0], Cell::Int(4));
    }

    #[test]
    fn push_int_column_appends_per_row() {
        let mut g = grid();
        let names = g.take_column(0);
        let mut t = StatTable::from_grid(g, names);
        t.push_int_column("W", &[1, 1]);
        assert_eq!(t.int_column(t.column("W").unwrap()), vec![Some(1), Some(1)]);
    }
}
