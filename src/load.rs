// src/load.rs

//! Game directories on disk in, JSON reports out.
//!
//! A game directory holds the saved pages for one game:
//! `log.html`, `batting_away.html`, `batting_home.html`,
//! `pitching_away.html`, `pitching_home.html` and `linescore.html`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

use crate::game::{GameInputs, GameReport};
use crate::html::grid_from_html;
use crate::side::HomeAway;
use crate::table::RawGrid;

pub const LOG_FILE: &str = "log.html";
pub const LINESCORE_FILE: &str = "linescore.html";

fn read_page(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).with_context(|| format!("reading {:?}", path))
}

fn read_grid(dir: &Path, name: &str) -> Result<RawGrid> {
    let html = read_page(dir, name)?;
    grid_from_html(&html).with_context(|| format!("parsing table in {}", name))
}

fn read_sides(dir: &Path, kind: &str) -> Result<HomeAway<RawGrid>> {
    Ok(HomeAway {
        away: read_grid(dir, &format!("{}_away.html", kind))?,
        home: read_grid(dir, &format!("{}_home.html", kind))?,
    })
}

/// Load one game directory; the directory name becomes the game id.
#[instrument(level = "debug", skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_game_dir<P: AsRef<Path>>(dir: P) -> Result<GameInputs> {
    let dir = dir.as_ref();
    let id = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("game directory {:?} has no name", dir))?;

    Ok(GameInputs {
        id,
        log: read_page(dir, LOG_FILE)?,
        batting: read_sides(dir, "batting")?,
        pitching: read_sides(dir, "pitching")?,
        linescore: read_grid(dir, LINESCORE_FILE)?,
    })
}

/// Every directory directly under `root` that holds a game log, sorted.
pub fn discover_games<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let pattern = root.as_ref().join("*").join(LOG_FILE);
    let pattern = pattern.to_string_lossy();
    let mut dirs: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("bad glob pattern {}", pattern))?
        .filter_map(|entry| entry.ok())
        .filter_map(|log| log.parent().map(Path::to_path_buf))
        .collect();
    dirs.sort();
    debug!(games = dirs.len(), "discovered game directories");
    Ok(dirs)
}

#[derive(Serialize)]
struct StampedReport<'a> {
    processed_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a GameReport,
}

/// Write `<out_dir>/<id>.json`, replacing any earlier report for the game.
pub fn write_report<P: AsRef<Path>>(out_dir: P, report: &GameReport) -> Result<PathBuf> {
    let stamped = StampedReport {
        processed_at: Utc::now(),
        report,
    };
    write_json_atomic(out_dir.as_ref(), &report.id, &stamped)
}

fn write_json_atomic<T: Serialize>(out_dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    // 1) target path
    fs::create_dir_all(out_dir).with_context(|| format!("creating {:?}", out_dir))?;
    let path = out_dir.join(format!("{}.json", name));

    // 2) write to a tmp file, then rename over the target
    let tmp_path = out_dir.join(format!(".{}.json.tmp", name));
    let written = fs::File::create(&tmp_path)
        .with_context(|| format!("creating {:?}", tmp_path))
        .and_then(|mut tmp| {
            serde_json::to_writer_pretty(&mut tmp, value).context("serializing report")?;
            tmp.write_all(b"\n")?;
            Ok(())
        });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    Ok(path)
}
