//! Configuration and constants.
//!
//! This module provides:
//! - Redirect and header constants
//! - HTTP header name constants
//! - The library `Config` and its log line style

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogStyle};
