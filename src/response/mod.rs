//! Response entity and redirect handling.
//!
//! This module turns a completed exchange into a [`Response`] and derives
//! redirect information from it.

mod location;
mod redirects;
mod types;

pub use location::redirect_location;
pub use redirects::{build, build_with_config};
pub use types::{ContentMetrics, Headers, LocationResolution, Response};
