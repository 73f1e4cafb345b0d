// src/patterns.rs

//! Regex catalog shared by every cleaner.
//!
//! Compiled once on first use and only ever read afterwards, so the same
//! `&'static Patterns` can be used from any number of threads.

use once_cell::sync::Lazy;
use regex::Regex;

pub struct Patterns {
    /// `Hitting Difficulty is <difficulty>` up to the end of the clause, or up
    /// to the next `<Word> Difficulty` label once misc lines are joined.
    pub difficulty: Regex,
    /// `Inning <n>:` at the start of a line; captures `inning`.
    pub inning_header: Regex,
    /// `<team> batting.` as a whole line; captures `team`.
    pub team_header: Regex,
    /// `<Stat Name>: <n>`; use with `captures_iter`, a line carries several.
    pub stat_entry: Regex,
    /// The canonical per-team summary line.
    pub full_stat_line: Regex,
    /// ` (free text)` annotations.
    pub parenthetical: Regex,
    /// Period left behind by abbreviated names (`Jr.`, `J.`).
    pub trailing_period: Regex,
    /// Optional lowercase substitution prefix, name, comma; captures `name`.
    pub batter_name: Regex,
    /// `(W)`, `(L, 2-3)`, `(BS, 1)`...; captures `decision`.
    pub pitcher_decision: Regex,
    /// Name cut short by the page; captures the `name` before the ellipsis.
    pub pitcher_truncation: Regex,
    /// Ellipsis left in a truncated name.
    pub ellipsis: Regex,
    /// Markup that separates narrative lines.
    pub line_break: Regex,
    /// Inline styling tags carrying no content of their own.
    pub decorative_markup: Regex,
    /// `Inning <n>:` anywhere in a fused line.
    pub inning_clause: Regex,
    /// `<Team> batting.` in a fused line, where the team is the run of
    /// capitalised words directly before ` batting.`.
    pub batting_clause: Regex,
}

pub static PATTERNS: Lazy<Patterns> = Lazy::new(Patterns::compile);

fn re(src: &str) -> Regex {
    Regex::new(src).unwrap_or_else(|e| panic!("invalid catalog pattern {src:?}: {e}"))
}

impl Patterns {
    fn compile() -> Self {
        Self {
            difficulty: re(
                r"Hitting Difficulty is (?P<difficulty>[^.,;]+?)(?:[.,;]| [A-Z][A-Za-z]* Difficulty\b|$)",
            ),
            inning_header: re(r"^(?P<inning>Inning \d+):"),
            team_header: re(r"^(?P<team>.+) batting\.$"),
            stat_entry: re(r"(?P<stat>[A-Z][A-Za-z]*(?: [A-Z][A-Za-z]*)*): (?P<value>\d+)"),
            full_stat_line: re(
                r"^Runs: \d+ Hits: \d+ Walks: \d+ Errors: \d+ Pitches: \d+(?: Runners Left On: \d+)?$",
            ),
            parenthetical: re(r" \([^)]*\)"),
            trailing_period: re(r"\."),
            batter_name: re(r"^(?:[a-z]-)?(?P<name>[^,]+)(?:,|$)"),
            pitcher_decision: re(r"\s*\((?P<decision>[A-Z]{1,3})(?:,[^)]*)?\)"),
            pitcher_truncation: re(r"^(?P<name>.*?)(?:\.\.\.|…)$"),
            ellipsis: re(r"\.\.\.|…"),
            line_break: re(r"(?i)<\s*br\s*/?\s*>|<\s*/?\s*p\s*>"),
            decorative_markup: re(r"(?i)<\s*/?\s*(?:b|strong|i|em|u|span|font)\b[^>]*>"),
            inning_clause: re(r"Inning \d+:"),
            batting_clause: re(r"[A-Z][\w'.&-]*(?: [A-Z][\w'.&-]*)* batting\."),
        }
    }
}
