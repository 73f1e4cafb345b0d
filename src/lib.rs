pub mod boxscore;
pub mod config;
pub mod error;
pub mod game;
pub mod html;
pub mod linescore;
pub mod load;
pub mod log;
pub mod names;
pub mod patterns;
pub mod side;
pub mod table;

pub use config::ParseConfig;
pub use game::{parse_game, process_games, BatchOutcome, GameInputs, GameReport};
