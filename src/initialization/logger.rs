//! Logger setup.
//!
//! The library only emits through the `log` facade: `trace!` per redirect hop
//! walked, `warn!` when a history is cut at `max_redirect_hops`, `debug!` when
//! a location falls back to its raw value. This installs an `env_logger`
//! backend for binaries that want those lines.

use std::io::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use log::{Level, Record};

use crate::config::{Config, LogStyle};
use crate::error_handling::InitializationError;

/// Installs a global logger configured from `config`.
///
/// `config.log_filter` is applied first and `RUST_LOG` after it, so directives
/// from the environment win for the modules they name.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
pub fn init_logger_from(config: &Config) -> Result<(), InitializationError> {
    let style = config.log_style.clone();

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .parse_default_env()
        .format(move |buf, record| writeln!(buf, "{}", render(&style, record, Utc::now())))
        .try_init()?;

    Ok(())
}

/// Formats one record as a single line without the trailing newline.
fn render(style: &LogStyle, record: &Record, at: DateTime<Utc>) -> String {
    match style {
        LogStyle::Compact => {
            // Pad before coloring so escape codes don't count toward the width
            let level = format!("{:<5}", record.level());
            let level = match record.level() {
                Level::Error => level.red(),
                Level::Warn => level.yellow(),
                Level::Info => level.green(),
                Level::Debug => level.blue(),
                Level::Trace => level.dimmed(),
            };
            format!(
                "{} {} {} {}",
                at.format("%H:%M:%S%.3f"),
                level,
                record.target(),
                record.args()
            )
        }
        LogStyle::Json => serde_json::json!({
            "ts": at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "level": record.level().as_str(),
            "target": record.target(),
            "msg": record.args().to_string(),
        })
        .to_string(),
    }
}
