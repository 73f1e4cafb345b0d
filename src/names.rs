// src/names.rs

use std::collections::BTreeMap;
use tracing::trace;

use crate::patterns::PATTERNS;

/// Original spelling → cleaned spelling, only for names that changed.
///
/// Other tables on the same page key players by the original spelling, so
/// callers apply this map to line those rows up with the cleaned index.
pub type NameMap = BTreeMap<String, String>;

/// Remove every abbreviation period from `name`.
pub fn strip_periods(name: &str) -> String {
    PATTERNS.trailing_period.replace_all(name, "").into_owned()
}

/// Clean a column of player names.
///
/// Returns the cleaned names in input order (nothing dropped) together with
/// the map of names that actually changed.
pub fn normalize_names<I, S>(names: I) -> (Vec<String>, NameMap)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned = Vec::new();
    let mut changed = NameMap::new();

    for name in names {
        let original = name.as_ref();
        if !PATTERNS.trailing_period.is_match(original) {
            cleaned.push(original.to_string());
            continue;
        }
        let fixed = strip_periods(original);
        trace!(original, cleaned = %fixed, "normalized player name");
        changed.insert(original.to_string(), fixed.clone());
        cleaned.push(fixed);
    }

    (cleaned, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_periods_and_reports_changes() {
        let (cleaned, map) = normalize_names(["Smith Jr.", "Ohtani", "J. D. Martinez"]);
        assert_eq!(cleaned, vec!["Smith Jr", "Ohtani", "J D Martinez"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Smith Jr."], "Smith Jr");
        assert_eq!(map["J. D. Martinez"], "J D Martinez");
        assert!(!map.contains_key("Ohtani"));
    }

    #[test]
    fn idempotent() {
        let input = vec!["A. Judge".to_string(), "Soto".to_string(), "Acuna Jr.".to_string()];
        let (once, _) = normalize_names(&input);
        let (twice, second_map) = normalize_names(&once);
        assert_eq!(once, twice);
        assert!(second_map.is_empty());
        assert!(twice.iter().all(|n| !n.contains('.')));
    }

    #[test]
    fn empty_input() {
        let (cleaned, map) = normalize_names(Vec::<String>::new());
        assert!(cleaned.is_empty());
        assert!(map.is_empty());
    }
}
