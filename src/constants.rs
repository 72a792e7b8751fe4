pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const LOG4RS_CONF_FILE_VAR: &str = "LOG4RS_CONFIG_FILE";

pub const DEFAULT_DATABASE_URL: &str = "tournament.sqlite3";

/// The tournament callers mean when they don't name one.
pub const DEFAULT_TOURNAMENT_ID: i32 = 1;
