//! Error type definitions.
//!
//! None of these errors stop response processing. They describe why a
//! best-effort operation fell back, or why logger setup failed.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Reasons an absolute redirect location could not be resolved.
///
/// Carried by `LocationResolution::RawFallback`; the string API logs it and
/// returns the raw location instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The location contains an ASCII control character.
    #[error("Location contains a control character at byte {0}")]
    ControlCharacter(usize),

    /// The location is not a valid URL reference.
    #[error("Invalid location: {0}")]
    InvalidLocation(url::ParseError),

    /// The response carries no request to resolve against.
    #[error("No request URL to resolve against")]
    MissingBase,

    /// The request URL is not an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidBase(url::ParseError),
}

/// Error types for capturing a live transport response.
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Reading the response body failed.
    #[error("Failed to read response body: {0}")]
    BodyError(#[from] reqwest::Error),
}
