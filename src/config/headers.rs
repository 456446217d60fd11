//! HTTP header name constants.
//!
//! Names are spelled in their canonical form. Lookups against response headers
//! go through `Response::header`, which falls back to a case-insensitive match.

/// Redirect target header
pub const HEADER_LOCATION: &str = "Location";
/// Media type header
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
