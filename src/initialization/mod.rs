//! Process-level setup for binaries embedding this crate.

mod logger;

// Re-export public API
pub use logger::init_logger_from;
