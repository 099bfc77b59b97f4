use log::Level;
use shared::constants::{DEFAULT_BASE_PATH, DEFAULT_LOG_LEVEL};
use shared::normalize_base;

/// Path prefix the app is served under, e.g. `/games` when deployed next to other sites.
pub fn base_path() -> String {
    normalize_base(option_env!("GAMES_HUB_BASE_PATH").unwrap_or(DEFAULT_BASE_PATH))
}

pub fn log_level() -> Level {
    option_env!("GAMES_HUB_LOG_LEVEL")
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .parse()
        .unwrap_or(Level::Info)
}
