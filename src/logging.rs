//! log4rs initialisation for the binary.
//!
//! Uses the YAML config file when it exists, otherwise logs warnings and
//! errors to stderr.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{h({l})} {M} - {m}{n}";

/// Console-only configuration used when no config file is present.
pub fn default_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Install the global logger. Call once, from `main`.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default()).map_err(|e| {
            format!("Error initializing log4rs from {}: {e}", config_file.display())
        })?;
        log::debug!("Logging configured from {}", config_file.display());
    } else {
        log4rs::init_config(default_config(LevelFilter::Warn)?)?;
    }
    Ok(())
}
