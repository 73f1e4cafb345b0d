// src/boxscore/mod.rs

//! Per-player boxscore cleaning. Batting and pitching share the raw shape
//! (player rows + trailing totals row) and the name normalizer, but nothing
//! else, so each is a free function.

pub mod batting;
pub mod decision;
pub mod pitching;
pub mod totals;

pub use batting::{batter_name, clean_batting, BattingBoxscore};
pub use decision::Decision;
pub use pitching::{clean_pitching, decision_codes, reconcile_abbreviations, Abbreviation, PitchingBoxscore};
pub use totals::{validate_totals, TotalsMismatch};
