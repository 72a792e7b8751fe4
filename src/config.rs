use crate::constants::{DATABASE_URL_VAR, DEFAULT_DATABASE_URL, LOG4RS_CONF_FILE_VAR};
use crate::utils::{env_var, env_var_or};
use once_cell::sync::Lazy;

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::new_from_env());

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub log4rs_config_file: Option<String>,
}

impl Config {
    /// loads `.env` if there is one; nothing here is required
    fn new_from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            database_url: env_var_or(DATABASE_URL_VAR, DEFAULT_DATABASE_URL),
            log4rs_config_file: env_var(LOG4RS_CONF_FILE_VAR),
        }
    }
}
