//! Transport-side view of a completed exchange.
//!
//! A transport that follows redirects keeps a backward link from each exchange
//! to the redirect response that caused it. [`Exchange`] is the seam the
//! response builder reads that history through; [`RecordedExchange`] is an
//! owned implementation that a transport adapter (or a test) can fill in.

mod capture;

pub use capture::{capture, headers_from_map};

use crate::response::Headers;

/// One completed HTTP round trip, with a link to the exchange that caused it.
pub trait Exchange {
    /// Status code of this hop.
    fn status_code(&self) -> u16;

    /// Response headers of this hop, names as delivered by the transport.
    fn headers(&self) -> &Headers;

    /// Response body of this hop.
    fn body(&self) -> &[u8];

    /// URL that was requested at this hop.
    fn url(&self) -> &str;

    /// The redirect exchange that caused this one, if the transport followed a redirect.
    fn caused_by(&self) -> Option<&dyn Exchange>;
}

/// An exchange captured into owned memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedExchange {
    /// Status code of this hop (0 for hops known only by URL)
    pub status_code: u16,
    /// Response headers
    pub headers: Headers,
    /// Response body
    pub body: Vec<u8>,
    /// URL requested at this hop
    pub url: String,
    /// Exchange that redirected to this one
    pub previous: Option<Box<RecordedExchange>>,
}

impl RecordedExchange {
    /// Creates an exchange with no predecessor.
    pub fn new(status_code: u16, headers: Headers, body: Vec<u8>, url: impl Into<String>) -> Self {
        Self {
            status_code,
            headers,
            body,
            url: url.into(),
            previous: None,
        }
    }

    /// Links `previous` as the exchange that redirected to this one.
    pub fn with_predecessor(mut self, previous: RecordedExchange) -> Self {
        self.previous = Some(Box::new(previous));
        self
    }

    /// Builds a final exchange from a forward-ordered list of the URLs requested at each hop.
    ///
    /// `hops` starts with the original request URL and ends with the URL of the
    /// final hop. Every earlier hop becomes a predecessor that carries only its
    /// URL. An empty `hops` yields an exchange with an empty URL and no history.
    pub fn from_hops<S: AsRef<str>>(
        status_code: u16,
        headers: Headers,
        body: Vec<u8>,
        hops: &[S],
    ) -> Self {
        let Some((last, earlier)) = hops.split_last() else {
            return Self::new(status_code, headers, body, "");
        };

        let previous = earlier.iter().fold(None, |previous, url| {
            Some(Box::new(RecordedExchange {
                url: url.as_ref().to_string(),
                previous,
                ..Default::default()
            }))
        });

        Self {
            status_code,
            headers,
            body,
            url: last.as_ref().to_string(),
            previous,
        }
    }
}

impl Exchange for RecordedExchange {
    fn status_code(&self) -> u16 {
        self.status_code
    }

    fn headers(&self) -> &Headers {
        &self.headers
    }

    fn body(&self) -> &[u8] {
        &self.body
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn caused_by(&self) -> Option<&dyn Exchange> {
        self.previous.as_deref().map(|e| e as &dyn Exchange)
    }
}
