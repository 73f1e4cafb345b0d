use anyhow::{bail, Result};
use clap::Parser;
use showscraper::{
    load::{discover_games, load_game_dir, write_report},
    process_games, ParseConfig,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "showscraper")]
#[command(about = "Clean saved game logs, boxscores and linescores into JSON reports")]
struct Args {
    /// Directory holding one sub-directory per game
    input: PathBuf,

    /// Output directory for JSON reports
    #[arg(short, long, default_value = "reports")]
    output: PathBuf,

    /// YAML parse configuration (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) config ───────────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => ParseConfig::from_yaml_file(path)?,
        None => ParseConfig::default(),
    };

    // ─── 3) discover + load game directories ─────────────────────────
    let dirs = discover_games(&args.input)?;
    if dirs.is_empty() {
        info!(input = %args.input.display(), "no game directories; exit");
        return Ok(());
    }
    info!("{} games to process", dirs.len());

    let mut failed = 0usize;
    let games: Vec<_> = dirs
        .iter()
        .filter_map(|dir| match load_game_dir(dir) {
            Ok(game) => Some(game),
            Err(e) => {
                error!(dir = %dir.display(), "load failed: {:#}", e);
                failed += 1;
                None
            }
        })
        .collect();

    // ─── 4) clean ────────────────────────────────────────────────────
    let outcome = process_games(games, &config);
    failed += outcome.failures.len();

    // ─── 5) write reports ────────────────────────────────────────────
    let mut written = 0usize;
    for report in &outcome.reports {
        match write_report(&args.output, report) {
            Ok(path) => {
                info!(game = %report.id, path = %path.display(), "wrote report");
                written += 1;
            }
            Err(e) => {
                error!(game = %report.id, "write failed: {:#}", e);
                failed += 1;
            }
        }
    }

    info!(written, failed, "done");
    if written == 0 {
        bail!("no reports written ({} games failed)", failed);
    }
    Ok(())
}
