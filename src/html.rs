// src/html.rs

//! Saved boxscore pages → [`RawGrid`].

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::table::RawGrid;

struct Selectors {
    table: Selector,
    header_row: Selector,
    row: Selector,
    cell: Selector,
}

static SELECTORS: Lazy<Selectors> = Lazy::new(|| Selectors {
    table: Selector::parse("table").expect("Invalid CSS selector for table"),
    header_row: Selector::parse("thead tr").expect("Invalid CSS selector for thead rows"),
    row: Selector::parse("tr").expect("Invalid CSS selector for rows"),
    cell: Selector::parse("th, td").expect("Invalid CSS selector for cells"),
});

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn in_thead(row: &ElementRef<'_>) -> bool {
    row.ancestors()
        .filter_map(|n| n.value().as_element())
        .any(|e| e.name() == "thead")
}

/// Read the first `<table>` in `html`.
///
/// Headers come from the first `<thead>` row. Tables without one get
/// positional headers `0..width`, and every `<tr>` stays a data row.
/// Short rows are padded with empty cells.
pub fn grid_from_html(html: &str) -> Result<RawGrid> {
    let doc = Html::parse_document(html);
    let Some(table) = doc.select(&SELECTORS.table).next() else {
        bail!("no <table> element found");
    };

    let headers: Vec<String> = table
        .select(&SELECTORS.header_row)
        .next()
        .map(|tr| tr.select(&SELECTORS.cell).map(cell_text).collect())
        .unwrap_or_default();

    let mut rows: Vec<Vec<String>> = table
        .select(&SELECTORS.row)
        .filter(|tr| !in_thead(tr))
        .map(|tr| tr.select(&SELECTORS.cell).map(cell_text).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    let width = rows.iter().map(Vec::len).chain([headers.len()]).max().unwrap_or(0);
    let headers = if headers.is_empty() {
        (0..width).map(|i| i.to_string()).collect()
    } else {
        headers
    };
    for row in &mut rows {
        row.resize(width, String::new());
    }

    debug!(columns = width, rows = rows.len(), "read html table");
    Ok(RawGrid::new(headers, rows))
}
