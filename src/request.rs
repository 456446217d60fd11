//! Request descriptor.
//!
//! The request that initiated an exchange, as built by the request-construction
//! side of a probing engine. Responses hold it behind an `Arc` and never modify it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::Url;

/// A request as issued by the probing engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method
    pub method: String,
    /// Target URL; also the base for resolving relative redirect locations
    pub url: String,
    /// Host component of `url`, empty if the URL does not parse
    pub host: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub data: Vec<u8>,
    /// Keyword to input value mapping used to generate this request
    pub input: HashMap<String, Vec<u8>>,
    /// Position of this request in the generated sequence
    pub position: usize,
    /// Raw request text, if the engine kept it
    pub raw: String,
}

impl Request {
    /// Creates a `GET` request for `url`.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let host = Url::parse(&url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        Self {
            method: "GET".to_string(),
            url,
            host,
            ..Default::default()
        }
    }

    /// Sets the HTTP method.
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds a header, replacing any previous value for the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request body.
    pub fn with_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_host() {
        let req = Request::new("https://example.com:8443/login?x=1");
        assert_eq!(req.method, "GET");
        assert_eq!(req.host, "example.com");
        assert_eq!(req.url, "https://example.com:8443/login?x=1");
    }

    #[test]
    fn test_new_unparseable_url_leaves_host_empty() {
        let req = Request::new("/relative/only");
        assert_eq!(req.host, "");
        assert_eq!(req.url, "/relative/only");
    }

    #[test]
    fn test_builder_methods() {
        let req = Request::new("http://a.test/")
            .with_method("POST")
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_data("user=FUZZ");
        assert_eq!(req.method, "POST");
        assert_eq!(
            req.headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(req.data, b"user=FUZZ".to_vec());
    }
}
