use crate::config::CONFIG;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

const DEFAULT_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Sets up log4rs from the file named in `LOG4RS_CONFIG_FILE`, or logs to stdout at `info` if
/// that isn't set. Only call this once per process.
pub fn init_logging() -> anyhow::Result<()> {
    match &CONFIG.log4rs_config_file {
        Some(path) => {
            log4rs::init_file(path, Default::default())?;
            log::debug!("Logging configured from {path}");
        }
        None => {
            let stdout = ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new(DEFAULT_PATTERN)))
                .build();
            let config = log4rs::Config::builder()
                .appender(Appender::builder().build("stdout", Box::new(stdout)))
                .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
            log4rs::init_config(config)?;
        }
    }
    Ok(())
}
