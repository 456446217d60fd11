//! Configuration constants.
//!
//! Defaults used when building responses and classifying status codes.

/// Maximum number of predecessor exchanges walked when rebuilding a redirect chain.
///
/// Transports normally stop far earlier (reqwest's default policy allows 10 hops).
/// The bound only matters for a history that links back onto itself.
pub const MAX_REDIRECT_HOPS: usize = 50;

/// Lowest status code treated as a redirect.
pub const REDIRECT_STATUS_MIN: u16 = 300;
/// Highest status code treated as a redirect.
pub const REDIRECT_STATUS_MAX: u16 = 399;

/// Filter applied by `init_logger_from` when the config names none.
pub const DEFAULT_LOG_FILTER: &str = "probe_response=info";
