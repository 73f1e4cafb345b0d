use crate::patterns::PATTERNS;

/// Pull the hitting difficulty out of the joined misc block, if present.
pub fn extract_difficulty(misc: &str) -> Option<String> {
    PATTERNS
        .difficulty
        .captures(misc)
        .and_then(|c| c.name("difficulty"))
        .map(|m| m.as_str().trim().to_string())
        .filter(|d| !d.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_single_and_multi_word_levels() {
        assert_eq!(
            extract_difficulty("Game Log Legend Hitting Difficulty is Veteran").as_deref(),
            Some("Veteran")
        );
        assert_eq!(
            extract_difficulty("Legend Hitting Difficulty is Hall of Fame. Pitching Difficulty is Rookie.")
                .as_deref(),
            Some("Hall of Fame")
        );
    }

    #[test]
    fn absent_is_none() {
        assert_eq!(extract_difficulty(""), None);
        assert_eq!(extract_difficulty("Game Log Legend K = strikeout"), None);
    }
}
