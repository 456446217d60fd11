//! Redirect location resolution.

use log::debug;
use url::Url;

use crate::config::HEADER_LOCATION;
use crate::error_handling::ResolveError;
use crate::request::Request;
use crate::response::{LocationResolution, Response};

/// The first `Location` value of a 3xx response.
pub(crate) fn raw_location(response: &Response) -> Option<&str> {
    if !response.is_redirect() {
        return None;
    }
    response.header(HEADER_LOCATION)
}

/// Resolves `location` against the URL of `request`.
///
/// Locations containing ASCII control characters are rejected outright; the
/// WHATWG parser would otherwise percent-encode or strip them.
pub(crate) fn resolve_location(
    location: &str,
    request: Option<&Request>,
) -> Result<Url, ResolveError> {
    if let Some(pos) = location.bytes().position(|b| b.is_ascii_control()) {
        return Err(ResolveError::ControlCharacter(pos));
    }
    let base = request.ok_or(ResolveError::MissingBase)?;
    let base = Url::parse(&base.url).map_err(ResolveError::InvalidBase)?;
    base.join(location).map_err(ResolveError::InvalidLocation)
}

/// Returns the redirect target of a response.
///
/// Empty unless the status is 3xx and a `Location` header with a value is
/// present. With `absolute` false the first header value is returned verbatim.
/// With `absolute` true it is resolved against the request URL; if either side
/// fails to parse, the raw value is returned instead.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use probe_response::{redirect_location, Request, Response};
///
/// let mut response = Response {
///     status_code: 302,
///     request: Some(Arc::new(Request::new("http://example.com/a/b/"))),
///     ..Default::default()
/// };
/// response
///     .headers
///     .insert("Location".to_string(), vec!["../c".to_string()]);
///
/// assert_eq!(redirect_location(&response, false), "../c");
/// assert_eq!(redirect_location(&response, true), "http://example.com/a/c");
/// ```
pub fn redirect_location(response: &Response, absolute: bool) -> String {
    if !absolute {
        return raw_location(response).unwrap_or_default().to_string();
    }

    match response.resolve_redirect_location() {
        LocationResolution::RawFallback { location, reason } => {
            debug!("Keeping unresolved redirect location {:?}: {}", location, reason);
            location
        }
        resolution => resolution.into_location(),
    }
}
