//! Logger and logging macros
//!
//! For the macros to properly compile, the calling crate must add a dependency to
//! crate log (ie. `log.workspace = true`).

use appender::AppenderSpec;
use consts::*;
use log::LevelFilter;
use log4rs::{
    Config,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};
use logger::Builder;
use thiserror::Error;

mod appender;
mod consts;
mod logger;

pub use consts::{ERR_LOG_FILE_NAME, LOG_FILE_NAME};

#[derive(Clone, Debug, Error)]
pub enum LogError {
    #[error("Logger spec parsing error: {0}")]
    ParseLoggerSpecError(String),

    #[error("Log directory {0} is not a valid UTF-8 path")]
    InvalidLogDir(String),

    #[error("Failed building the {0} appender: {1}")]
    AppenderError(&'static str, String),

    #[error("Invalid logger configuration: {0}")]
    ConfigError(String),

    #[error("A global logger is already set")]
    AlreadyInitialized,
}

pub type LogResult<T> = std::result::Result<T, LogError>;

/// Configures the global logger with a console appender and, when `log_dir` is
/// provided, a rolling log file plus a rolling error file (warnings and above).
///
/// `filters` is a logger spec expression such as `info` or
/// `info,kasparov_rpc_service=debug`. Specs found in `RUST_LOG` are applied first.
pub fn init_logger(log_dir: Option<&str>, filters: &str) -> LogResult<()> {
    let filters = if filters.is_empty() { "info" } else { filters };

    let console_appender = AppenderSpec::console(CONSOLE_APPENDER, None);
    let file_appender = log_dir.map(|dir| AppenderSpec::roller(LOG_FILE_APPENDER, None, dir, LOG_FILE_NAME)).transpose()?;
    let err_file_appender = log_dir
        .map(|dir| AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), dir, ERR_LOG_FILE_NAME))
        .transpose()?;

    let appenders: Vec<&'static str> =
        [Some(&console_appender), file_appender.as_ref(), err_file_appender.as_ref()].into_iter().flatten().map(|x| x.name).collect();

    let loggers = Builder::new()
        .appenders(appenders.iter().copied())
        .parse_env(DEFAULT_LOGGER_ENV)
        .parse_expression(filters)
        .build();

    let config = Config::builder()
        .appender(console_appender.appender())
        .appenders(file_appender.map(|x| x.appender()))
        .appenders(err_file_appender.map(|x| x.appender()))
        .loggers(loggers.items())
        .build(Root::builder().appenders(appenders).build(loggers.root_level()))
        .map_err(|err| LogError::ConfigError(err.to_string()))?;

    log4rs::init_config(config).map_err(|_| LogError::AlreadyInitialized)?;
    Ok(())
}

/// Tries to init the global logger, but does not panic if it was already setup.
/// Should be used for tests.
pub fn try_init_logger(filters: &str) {
    let loggers = Builder::new().appenders([CONSOLE_APPENDER].into_iter()).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();
    let stderr = ConsoleAppender::builder().target(Target::Stderr).encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN_COLORED))).build();
    if let Ok(config) = Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER, Box::new(stderr)))
        .loggers(loggers.items())
        .build(Root::builder().appender(CONSOLE_APPENDER).build(loggers.root_level()))
    {
        let _ = log4rs::init_config(config);
    }
}

#[macro_export]
macro_rules! trace {
    ($($t:tt)*) => (
        log::trace!($($t)*);
    )
}

#[macro_export]
macro_rules! debug {
    ($($t:tt)*) => (
        log::debug!($($t)*);
    )
}

#[macro_export]
macro_rules! info {
    ($($t:tt)*) => (
        log::info!($($t)*);
    )
}

#[macro_export]
macro_rules! warn {
    ($($t:tt)*) => (
        log::warn!($($t)*);
    )
}

#[macro_export]
macro_rules! error {
    ($($t:tt)*) => (
        log::error!($($t)*);
    )
}
