//! probe_response library: the response side of an HTTP probing client.
//!
//! This library turns a completed HTTP exchange (as recorded by the transport,
//! including the backward-linked history of any redirects it followed) into a
//! [`Response`] value that filtering and reporting code can inspect.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use probe_response::{build, RecordedExchange, Request};
//!
//! let request = Arc::new(Request::new("http://a.test/start"));
//! let exchange = RecordedExchange::from_hops(
//!     200,
//!     HashMap::new(),
//!     b"done".to_vec(),
//!     &["http://a.test/start", "http://a.test/mid", "http://a.test/end"],
//! );
//!
//! let response = build(&exchange, Some(request));
//! assert_eq!(response.redirect_chain, vec!["http://a.test/mid".to_string()]);
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod exchange;
pub mod initialization;
mod request;
mod response;

// Re-export public API
pub use config::{Config, LogStyle};
pub use error_handling::{CaptureError, InitializationError, ResolveError};
pub use exchange::{capture, headers_from_map, Exchange, RecordedExchange};
pub use request::Request;
pub use response::{
    build, build_with_config, redirect_location, ContentMetrics, Headers, LocationResolution,
    Response,
};
