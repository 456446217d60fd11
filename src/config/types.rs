//! Configuration types.
//!
//! `Config` serializes with serde so a probing engine can embed it in its own
//! configuration file.

use serde::{Deserialize, Serialize};

use crate::config::constants::{DEFAULT_LOG_FILTER, MAX_REDIRECT_HOPS};

/// Line layout used by the installed logger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStyle {
    /// `HH:MM:SS.mmm LEVEL target message`, level colored when the terminal allows
    Compact,
    /// One JSON object per line with `ts`, `level`, `target` and `msg`
    Json,
}

/// Library configuration.
///
/// # Examples
///
/// ```
/// use probe_response::Config;
///
/// let config = Config {
///     max_redirect_hops: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.max_redirect_hops, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on predecessor exchanges walked per response (0 disables chain extraction)
    pub max_redirect_hops: usize,

    /// `env_logger` filter directives, e.g. `probe_response::response=trace`
    pub log_filter: String,

    /// Log line layout
    pub log_style: LogStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_redirect_hops: MAX_REDIRECT_HOPS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_style: LogStyle::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_redirect_hops, MAX_REDIRECT_HOPS);
        assert_eq!(config.log_filter, "probe_response=info");
        assert_eq!(config.log_style, LogStyle::Compact);
    }

    #[test]
    fn test_config_deserialize_partial() {
        // Missing fields fall back to defaults
        let config: Config =
            serde_json::from_str(r#"{"max_redirect_hops": 3, "log_style": "json"}"#)
                .expect("valid config json");
        assert_eq!(config.max_redirect_hops, 3);
        assert_eq!(config.log_style, LogStyle::Json);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_config_rejects_unknown_style() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"log_style": "pretty"}"#);
        assert!(result.is_err());
    }
}
