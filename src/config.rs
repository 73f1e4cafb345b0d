// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Column names a boxscore cleaner relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Column holding the player's displayed name.
    pub name_column: String,
    /// Rate column recomputable from the counting stats (AVG / ERA); always dropped.
    pub derived_column: String,
}

/// Knobs for the game log and boxscore cleaners.
///
/// Every field has a default matching the current profile pages, so a YAML
/// file only needs the keys it wants to override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Text separating the narrative log from the trailing legend/misc block.
    pub legend_marker: String,
    /// Decorative substrings removed verbatim before any other parsing.
    pub boilerplate: Vec<String>,
    pub batting: TableLayout,
    pub pitching: TableLayout,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            legend_marker: "Game Log Legend".to_string(),
            boilerplate: vec!["&nbsp;".to_string()],
            batting: TableLayout {
                name_column: "Player".to_string(),
                derived_column: "AVG".to_string(),
            },
            pitching: TableLayout {
                name_column: "Pitcher".to_string(),
                derived_column: "ERA".to_string(),
            },
        }
    }
}

impl ParseConfig {
    /// Load overrides from a YAML file; missing keys keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing config {:?}", path))
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }
}
