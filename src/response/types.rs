//! Response data structures.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{
    HEADER_CONTENT_TYPE, HEADER_LOCATION, REDIRECT_STATUS_MAX, REDIRECT_STATUS_MIN,
};
use crate::error_handling::ResolveError;
use crate::request::Request;
use crate::response::location::{raw_location, resolve_location};

/// Header name to ordered values, names kept as the transport delivered them.
pub type Headers = HashMap<String, Vec<String>>;

/// One completed exchange, as handed to filtering and reporting code.
///
/// Built once by [`crate::build`]. Apart from the collaborator-owned fields
/// (`raw_transcript`, `stored_artifact_reference`, the body metrics and
/// `cancelled`), nothing modifies it afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Response {
    /// Status code of the final hop
    pub status_code: u16,
    /// Final response headers
    pub headers: Headers,
    /// Final response body
    pub body: Vec<u8>,
    /// Body length in bytes, as counted by the engine
    pub content_length: usize,
    /// Word count of the body, as counted by the engine
    pub word_count: usize,
    /// Line count of the body, as counted by the engine
    pub line_count: usize,
    /// Exchange was aborted by caller policy; other fields may be partial
    pub cancelled: bool,
    /// Request that started the exchange
    pub request: Option<Arc<Request>>,
    /// Raw transcript of the exchange, empty unless a collaborator fills it
    pub raw_transcript: String,
    /// Location of a persisted copy, empty unless a collaborator writes one
    pub stored_artifact_reference: String,
    /// Intermediate redirect targets, oldest first, without the original and final URLs
    pub redirect_chain: Vec<String>,
}

/// Body metrics the engine filters on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentMetrics {
    /// Length in bytes
    pub content_length: usize,
    /// Number of space separated fields
    pub word_count: usize,
    /// Number of newline separated fields
    pub line_count: usize,
}

impl ContentMetrics {
    /// Counts a body the way the probing engine does.
    ///
    /// Words and lines are separator counts plus one, so an empty body has one
    /// word and one line.
    pub fn count(body: &[u8]) -> Self {
        Self {
            content_length: body.len(),
            word_count: body.iter().filter(|&&b| b == b' ').count() + 1,
            line_count: body.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    }
}

/// Outcome of resolving a redirect location to an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationResolution {
    /// The location resolved against the request URL.
    Resolved(String),
    /// Resolution failed; the raw header value is kept.
    RawFallback {
        /// Location header value, unmodified
        location: String,
        /// Why resolution failed
        reason: ResolveError,
    },
    /// Not a redirect, or no usable Location header.
    Absent,
}

impl LocationResolution {
    /// The location string callers should use (empty when absent).
    pub fn into_location(self) -> String {
        match self {
            LocationResolution::Resolved(url) => url,
            LocationResolution::RawFallback { location, .. } => location,
            LocationResolution::Absent => String::new(),
        }
    }
}

impl Response {
    /// Stores body metrics computed by the engine.
    pub fn with_metrics(mut self, metrics: ContentMetrics) -> Self {
        self.content_length = metrics.content_length;
        self.word_count = metrics.word_count;
        self.line_count = metrics.line_count;
        self
    }

    /// The stored body metrics.
    pub fn metrics(&self) -> ContentMetrics {
        ContentMetrics {
            content_length: self.content_length,
            word_count: self.word_count,
            line_count: self.line_count,
        }
    }

    /// All values of a header.
    ///
    /// Tries `name` exactly first, then an ASCII case-insensitive match. Names
    /// with no values are skipped.
    pub fn header_values(&self, name: &str) -> Option<&[String]> {
        if let Some(values) = self.headers.get(name).filter(|v| !v.is_empty()) {
            return Some(values.as_slice());
        }
        self.headers
            .iter()
            .find(|(key, values)| key.eq_ignore_ascii_case(name) && !values.is_empty())
            .map(|(_, values)| values.as_slice())
    }

    /// First value of a header, see [`Response::header_values`].
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// The `Content-Type` header, or an empty string.
    pub fn content_type(&self) -> &str {
        self.header(HEADER_CONTENT_TYPE).unwrap_or_default()
    }

    /// Whether the status code is in the 3xx range.
    pub fn is_redirect(&self) -> bool {
        (REDIRECT_STATUS_MIN..=REDIRECT_STATUS_MAX).contains(&self.status_code)
    }

    /// Whether the response carries a `Location` header.
    pub fn has_location(&self) -> bool {
        self.header(HEADER_LOCATION).is_some()
    }

    /// Redirect target of a 3xx response, see [`crate::redirect_location`].
    pub fn redirect_location(&self, absolute: bool) -> String {
        crate::response::redirect_location(self, absolute)
    }

    /// Resolves the redirect target to an absolute URL, reporting how it went.
    pub fn resolve_redirect_location(&self) -> LocationResolution {
        match raw_location(self) {
            None => LocationResolution::Absent,
            Some(location) => match resolve_location(location, self.request.as_deref()) {
                Ok(url) => LocationResolution::Resolved(url.to_string()),
                Err(reason) => LocationResolution::RawFallback {
                    location: location.to_string(),
                    reason,
                },
            },
        }
    }
}
