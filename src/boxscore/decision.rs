use serde::Serialize;
use std::fmt;

/// Pitching decisions, in the fixed column order every cleaned pitching
/// table carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Decision {
    Win,
    Loss,
    Save,
    BlownSave,
    Hold,
}

impl Decision {
    pub const ALL: [Decision; 5] = [
        Decision::Win,
        Decision::Loss,
        Decision::Save,
        Decision::BlownSave,
        Decision::Hold,
    ];

    /// Indicator column name.
    pub fn code(self) -> &'static str {
        match self {
            Decision::Win => "W",
            Decision::Loss => "L",
            Decision::Save => "SV",
            Decision::BlownSave => "BS",
            Decision::Hold => "HLD",
        }
    }

    /// Map an annotation code from a name cell; `S` and `H` are the short
    /// forms some pages print for saves and holds.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "W" => Some(Decision::Win),
            "L" => Some(Decision::Loss),
            "SV" | "S" => Some(Decision::Save),
            "BS" => Some(Decision::BlownSave),
            "HLD" | "H" => Some(Decision::Hold),
            _ => None,
        }
    }

    /// Position in [`Decision::ALL`].
    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|d| d.code())
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
