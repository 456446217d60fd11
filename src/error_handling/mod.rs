//! Error handling.
//!
//! Failures in this crate are non-fatal: malformed redirect history degrades to
//! a shorter chain, and unresolvable locations fall back to the raw header
//! value. The types here name those fallbacks so they can be logged or
//! inspected through `LocationResolution`.

mod types;

// Re-export public API
pub use types::{CaptureError, InitializationError, ResolveError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_messages() {
        assert_eq!(
            ResolveError::ControlCharacter(3).to_string(),
            "Location contains a control character at byte 3"
        );
        assert_eq!(
            ResolveError::MissingBase.to_string(),
            "No request URL to resolve against"
        );
        assert_eq!(
            ResolveError::InvalidBase(url::ParseError::RelativeUrlWithoutBase).to_string(),
            "Invalid base URL: relative URL without a base"
        );
    }
}
