use super::Cell;

/// Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Parse a count cell, tolerating surrounding whitespace/quotes.
pub fn parse_int(raw: &str) -> Option<i64> {
    clean_str(raw).parse().ok()
}

/// Type a whole column at once:
/// - every non-empty cell an integer → `Int`
/// - every non-empty cell a number → `Float`
/// - otherwise → `Text`
///
/// Blank cells become `Empty` in numeric columns and stay `Text` otherwise.
pub fn infer_column(cells: &[&str]) -> Vec<Cell> {
    let values: Vec<&str> = cells.iter().map(|c| clean_str(c)).collect();
    let filled = || values.iter().filter(|v| !v.is_empty());

    let any = filled().next().is_some();
    let all_int = any && filled().all(|v| v.parse::<i64>().is_ok());
    let all_num = any && filled().all(|v| v.parse::<f64>().is_ok());

    values
        .iter()
        .map(|v| match (v.is_empty(), all_int, all_num) {
            (true, _, true) => Cell::Empty,
            (false, true, _) => v.parse().map(Cell::Int).unwrap_or(Cell::Empty),
            (false, false, true) => v.parse().map(Cell::Float).unwrap_or(Cell::Empty),
            _ => Cell::Text(v.to_string()),
        })
        .collect()
}
