/*
[INPUT]:  LogSettings (console filter, log directory)
[OUTPUT]: Global tracing subscriber with console and rolling file layers
[POS]:    Logging layer - process-wide subscriber setup
[UPDATE]: When changing log destinations, rotation or formats
*/

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

pub const LOG_FILE_PREFIX: &str = "trading_bot";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const MAX_LOG_FILES: usize = 3;

// Everything from our crates at DEBUG, transport internals stay quieter.
const FILE_FILTER: &str = "debug,hyper=info,hyper_util=info,reqwest=info,rustls=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// EnvFilter directive for the console layer
    pub console_level: String,
    pub log_dir: PathBuf,
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; hold it until exit.
pub fn init_logging(settings: &LogSettings) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&settings.log_dir)
        .with_context(|| format!("create log directory {}", settings.log_dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&settings.log_dir)
        .context("create rolling log file")?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let console_filter = EnvFilter::try_new(&settings.console_level).context("invalid log level")?;
    let file_filter = EnvFilter::try_new(FILE_FILTER).context("invalid file log filter")?;

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(file_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected_before_install() {
        let settings = LogSettings {
            console_level: "my_crate=verbose".to_string(),
            log_dir: std::env::temp_dir().join(format!("futures-bot-log-{}", std::process::id())),
        };
        let err = init_logging(&settings).unwrap_err();
        assert!(format!("{err:#}").contains("invalid log level"));
    }

    #[test]
    fn test_file_filter_parses() {
        assert!(EnvFilter::try_new(FILE_FILTER).is_ok());
    }
}
