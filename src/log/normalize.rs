// src/log/normalize.rs

use tracing::{debug, instrument};

use crate::config::ParseConfig;
use crate::patterns::PATTERNS;

/// Narrative text split at the legend marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Play-by-play lines, trimmed and non-empty, in page order.
    pub log: Vec<String>,
    /// Everything from the legend marker on, joined with single spaces.
    pub misc: String,
}

/// Strip decoration from a raw game log and split it into log lines and the
/// trailing misc block.
///
/// When the legend marker is absent the whole text is log and `misc` is empty.
#[instrument(level = "debug", skip_all, fields(raw_len = raw.len()))]
pub fn normalize(raw: &str, config: &ParseConfig) -> Segments {
    // 1) boilerplate + inline styling
    let mut text = PATTERNS.decorative_markup.replace_all(raw, "").into_owned();
    for junk in config.boilerplate.iter().filter(|j| !j.is_empty()) {
        text = text.replace(junk.as_str(), " ");
    }

    // 2) asterisks
    text.retain(|c| c != '*');

    // 3) parenthetical annotations
    let stripped = PATTERNS.parenthetical.replace_all(&text, "");
    let text: &str = &stripped;

    // 4) log / misc partition
    let (log_part, misc_part) = match text.find(config.legend_marker.as_str()) {
        Some(idx) if !config.legend_marker.is_empty() => text.split_at(idx),
        _ => {
            debug!("legend marker not found; treating whole text as log");
            (text, "")
        }
    };

    // 5) line split
    let log = split_lines(log_part);
    let misc = split_lines(misc_part).join(" ");
    debug!(lines = log.len(), misc_len = misc.len(), "normalized game log");

    Segments { log, misc }
}

/// Split on line-break markup, then cut fused pieces so inning and team
/// headers always stand on their own line.
///
/// Only a piece carrying an `Inning N:` clause counts as fused. Any other
/// delimited piece is already one line and stays whole.
fn split_lines(segment: &str) -> Vec<String> {
    PATTERNS
        .line_break
        .split(segment)
        .flat_map(cut_fused)
        .map(str::to_string)
        .collect()
}

fn cut_fused(piece: &str) -> Vec<&str> {
    if !PATTERNS.inning_clause.is_match(piece) {
        let piece = piece.trim();
        return if piece.is_empty() { Vec::new() } else { vec![piece] };
    }

    let mut cuts = vec![0, piece.len()];
    for m in PATTERNS.inning_clause.find_iter(piece) {
        cuts.push(m.start());
        cuts.push(m.end());
    }
    for m in PATTERNS.batting_clause.find_iter(piece) {
        cuts.push(m.start());
        cuts.push(m.end());
    }
    cuts.sort_unstable();
    cuts.dedup();

    cuts.windows(2)
        .map(|w| piece[w[0]..w[1]].trim())
        .filter(|s| !s.is_empty())
        .collect()
}
