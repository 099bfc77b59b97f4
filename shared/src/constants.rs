pub const APP_NAME: &str = "Games Hub";
pub const ROOT_PATH: &str = "/";
pub const TITLE_SEPARATOR: &str = " · ";

pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_LOG_LEVEL: &str = "info";
