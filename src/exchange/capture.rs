//! Capturing exchanges from `reqwest`.
//!
//! The request itself is issued elsewhere; these helpers only read an already
//! received response into a [`RecordedExchange`].

use reqwest::header::HeaderMap;
use url::Url;

use crate::error_handling::CaptureError;
use crate::exchange::RecordedExchange;
use crate::response::Headers;

/// Converts a `reqwest` header map into a multi-valued header mapping.
///
/// Value order per name is preserved. Names keep the case `reqwest` delivers
/// them in (lowercase). Non-UTF-8 values are converted lossily.
pub fn headers_from_map(headers: &HeaderMap) -> Headers {
    let mut out = Headers::new();
    for (name, value) in headers {
        out.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    out
}

/// Reads a received response into a [`RecordedExchange`].
///
/// `previous` lists the URLs requested before this one, oldest first (the
/// shape of `reqwest::redirect::Attempt::previous`). The final URL is taken
/// from the response itself.
///
/// # Errors
///
/// Returns `CaptureError::BodyError` if the body cannot be read.
pub async fn capture(
    response: reqwest::Response,
    previous: &[Url],
) -> Result<RecordedExchange, CaptureError> {
    let status_code = response.status().as_u16();
    let headers = headers_from_map(response.headers());
    let final_url = response.url().to_string();
    let body = response.bytes().await?.to_vec();

    log::trace!(
        "Captured {} from {} after {} previous hop(s)",
        status_code,
        final_url,
        previous.len()
    );

    let mut hops: Vec<&str> = previous.iter().map(Url::as_str).collect();
    hops.push(final_url.as_str());
    Ok(RecordedExchange::from_hops(status_code, headers, body, &hops))
}
